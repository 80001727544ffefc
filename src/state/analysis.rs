//! Placeholder nutrition analysis.
//!
//! No inference happens here: after a fixed delay one of four canned
//! [`NutritionResult`]s is picked at random.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Nutrition facts for one dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub food_name: &'static str,
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub health_tip: &'static str,
}

pub static NUTRITION_TABLE: [NutritionResult; 4] = [
    NutritionResult {
        food_name: "Grilled Chicken Salad",
        calories: 350,
        protein: 32,
        carbs: 18,
        fats: 14,
        health_tip: "Great source of lean protein. Add some avocado for healthy fats!",
    },
    NutritionResult {
        food_name: "Pasta with Vegetables",
        calories: 480,
        protein: 15,
        carbs: 72,
        fats: 12,
        health_tip: "Rich in carbohydrates for energy. Consider whole grain pasta for more fiber.",
    },
    NutritionResult {
        food_name: "Fruit Smoothie Bowl",
        calories: 290,
        protein: 8,
        carbs: 58,
        fats: 5,
        health_tip: "Packed with vitamins and antioxidants. Add chia seeds for omega-3s.",
    },
    NutritionResult {
        food_name: "Avocado Toast",
        calories: 320,
        protein: 10,
        carbs: 28,
        fats: 22,
        health_tip: "Excellent source of healthy monounsaturated fats and fiber.",
    },
];

/// Uniform pick from [`NUTRITION_TABLE`].
pub fn pick_result<R: Rng>(rng: &mut R) -> &'static NutritionResult {
    &NUTRITION_TABLE[rng.random_range(0..NUTRITION_TABLE.len())]
}

/// Timer used to simulate analysis latency.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Busy,
    Done(&'static NutritionResult),
}

/// Ties a pending completion to the run that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct AnalysisSimulator {
    state: AnalysisState,
    generation: u64,
}

impl AnalysisSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == AnalysisState::Busy
    }

    pub fn result(&self) -> Option<&'static NutritionResult> {
        match self.state {
            AnalysisState::Done(result) => Some(result),
            _ => None,
        }
    }

    /// Enter `Busy`. Returns None without an image or while already busy.
    pub fn begin(&mut self, image_present: bool) -> Option<AnalysisTicket> {
        if !image_present {
            debug!("Analyze ignored: no image selected");
            return None;
        }
        if self.is_busy() {
            debug!("Analyze ignored: already running");
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = AnalysisState::Busy;
        Some(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// Finish the run behind `ticket`; stale tickets are dropped.
    pub fn complete<R: Rng>(
        &mut self,
        ticket: AnalysisTicket,
        rng: &mut R,
    ) -> Option<&'static NutritionResult> {
        if ticket.generation != self.generation || !self.is_busy() {
            warn!("Dropping stale analysis result");
            return None;
        }
        let result = pick_result(rng);
        self.state = AnalysisState::Done(result);
        info!("Analysis finished: {} ({} kcal)", result.food_name, result.calories);
        Some(result)
    }

    /// Back to `Idle`; a pending run can no longer complete.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = AnalysisState::Idle;
    }
}
