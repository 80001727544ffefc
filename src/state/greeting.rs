use std::fmt;

/// Coarse part of the day used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Every hour maps to exactly one bucket; anything outside 5..21 is night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good Morning",
            TimeOfDay::Afternoon => "Good Afternoon",
            TimeOfDay::Evening => "Good Evening",
            TimeOfDay::Night => "Good Night",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "\u{2600}\u{fe0f}",
            TimeOfDay::Afternoon => "\u{1f324}\u{fe0f}",
            TimeOfDay::Evening => "\u{1f306}",
            TimeOfDay::Night => "\u{1f319}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub time_of_day: TimeOfDay,
    pub phrase: &'static str,
    pub symbol: &'static str,
    pub name: String,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.phrase, self.name, self.symbol)
    }
}

pub fn format_greeting(hour: u32, name: &str) -> Greeting {
    let time_of_day = TimeOfDay::from_hour(hour);
    Greeting {
        time_of_day,
        phrase: time_of_day.phrase(),
        symbol: time_of_day.symbol(),
        name: name.to_string(),
    }
}
