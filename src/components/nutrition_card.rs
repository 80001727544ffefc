use leptos::html::Div;
use leptos::prelude::*;

use crate::state::NutritionResult;

/// Results card for one analysis. Scrolls itself into view when shown.
#[component]
pub fn NutritionCard(result: &'static NutritionResult) -> impl IntoView {
    let card_el = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if let Some(card) = card_el.get() {
            set_revealed.set(true);
            card.scroll_into_view();
        }
    });

    view! {
        <div node_ref=card_el class="results-card" class:revealed=move || revealed.get()>
            <h3 class="food-name">{result.food_name}</h3>
            <div class="macro-grid">
                <MacroTile label="Calories" value=result.calories unit="kcal" />
                <MacroTile label="Protein" value=result.protein unit="g" />
                <MacroTile label="Carbs" value=result.carbs unit="g" />
                <MacroTile label="Fats" value=result.fats unit="g" />
            </div>
            <div class="health-tip">
                <strong>"Health tip: "</strong>
                <span>{result.health_tip}</span>
            </div>
        </div>
    }
}

#[component]
fn MacroTile(label: &'static str, value: u32, unit: &'static str) -> impl IntoView {
    view! {
        <div class="macro-tile">
            <span class="macro-value">{value}</span>
            <span class="macro-unit">{unit}</span>
            <span class="macro-label">{label}</span>
        </div>
    }
}
