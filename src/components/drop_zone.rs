//! Empty upload box: drag-and-drop or browse for a meal photo.

use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::{use_app, AppContext};
use crate::browser::{self, BrowserFile};
use crate::state::select_file;

const FILE_INPUT_ID: &str = "meal-file-input";

fn load_file(app: AppContext, file: web_sys::File) {
    let controller = app.controller();
    spawn_local(async move {
        match select_file(&controller, &BrowserFile::new(file)).await {
            Ok(true) => {}
            Ok(false) => debug!("Image selection was superseded"),
            Err(e) => browser::report(e),
        }
    });
}

#[component]
pub fn DropZone() -> impl IntoView {
    let app = use_app();
    let (is_over, set_is_over) = signal(false);

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            load_file(app, file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            load_file(app, file);
        }
    };

    view! {
        <label
            for=FILE_INPUT_ID
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(false);
            }
            on:drop=on_drop
        >
            <div class="drop-zone-content">
                <div class="drop-icon">"\u{1f4f7}"</div>
                <p class="drop-main">"Drop a photo of your meal here"</p>
                <p class="drop-hint">"or click to browse"</p>
                <p class="drop-formats">"Supports JPEG, PNG, WebP"</p>
            </div>
            <input
                type="file"
                id=FILE_INPUT_ID
                accept="image/*"
                style="display: none"
                on:change=on_input_change
            />
        </label>
    }
}
