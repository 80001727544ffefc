//! Main screen: greeting, upload, analysis and results.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_app;
use crate::browser::{self, BrowserDelay};
use crate::components::drop_zone::DropZone;
use crate::components::greeting_banner::GreetingBanner;
use crate::components::image_preview::ImagePreview;
use crate::components::nutrition_card::NutritionCard;
use crate::state::{analyze, UploadSection};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let section = Memo::new(move |_| app.snapshot.with(|s| s.view.upload_section));
    let analyzing = Memo::new(move |_| app.snapshot.with(|s| s.view.analyzing));
    let analyze_enabled = Memo::new(move |_| app.snapshot.with(|s| s.view.analyze_enabled));
    let result = Memo::new(move |_| app.snapshot.with(|s| s.result));

    let on_logout = move |_| {
        let outcome = app.controller().borrow_mut().logout();
        if let Err(e) = outcome {
            browser::report(e);
        }
    };

    let on_analyze = move |_| {
        let controller = app.controller();
        spawn_local(async move {
            analyze(&controller, &BrowserDelay).await;
        });
    };

    view! {
        <div class="page dashboard-page">
            <header class="topbar">
                <h1 class="brand">"NutritionTrack"</h1>
                <button class="btn btn-secondary" on:click=on_logout>
                    "Log Out"
                </button>
            </header>

            <GreetingBanner />

            <section class="upload-section">
                {move || match section.get() {
                    UploadSection::Box => view! { <DropZone /> }.into_any(),
                    UploadSection::Preview => view! { <ImagePreview /> }.into_any(),
                }}

                <button
                    class="btn btn-primary analyze-btn"
                    disabled=move || !analyze_enabled.get()
                    on:click=on_analyze
                >
                    <Show
                        when=move || analyzing.get()
                        fallback=|| view! { <span>"Analyze Nutrition"</span> }
                    >
                        <span class="spinner small"></span>
                        <span>"Analyzing..."</span>
                    </Show>
                </button>
            </section>

            {move || result.get().map(|result| view! { <NutritionCard result=result /> })}
        </div>
    }
}
