use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_app;
use crate::browser::{self, BrowserDelay};
use crate::state::Delay;

/// Time-of-day greeting for the logged-in user; fades in shortly after mount.
#[component]
pub fn GreetingBanner() -> impl IntoView {
    let app = use_app();
    let (visible, set_visible) = signal(false);
    let greeting = Memo::new(move |_| app.snapshot.with(|s| s.greeting(browser::current_hour())));

    spawn_local(async move {
        BrowserDelay.sleep(Duration::from_millis(100)).await;
        let _ = set_visible.try_set(true);
    });

    view! {
        <div class="greeting" class:greeting-visible=move || visible.get()>
            {move || {
                greeting.get().map(|g| {
                    view! {
                        <h2>
                            {format!("{}, ", g.phrase)}
                            <span class="greeting-name">{g.name}</span>
                            {format!(" {}", g.symbol)}
                        </h2>
                    }
                })
            }}
        </div>
    }
}
