use leptos::prelude::*;

use crate::app::use_app;

/// The selected photo with a button to pick another one.
#[component]
pub fn ImagePreview() -> impl IntoView {
    let app = use_app();
    let src = Memo::new(move |_| app.snapshot.with(|s| s.preview.clone()));

    view! {
        <div class="image-preview">
            {move || src.get().map(|src| view! {
                <img src=src class="preview-image" alt="Selected meal" />
            })}
            <button
                class="btn btn-secondary"
                on:click=move |_| app.controller().borrow_mut().reset_upload()
            >
                "Change Image"
            </button>
        </div>
    }
}
