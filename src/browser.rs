//! Bridges from the state core to browser APIs: `localStorage`, timers,
//! file reads, the wall clock and blocking alerts.

use std::future::Future;
use std::time::Duration;

use js_sys::{ArrayBuffer, Promise, Uint8Array};
use tracing::{error, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{AppError, StorageError};
use crate::state::{Delay, ImageSource};
use crate::storage::{KeyValueStore, MemoryStore};

/// `window.localStorage`.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}

pub type Backend = Box<dyn KeyValueStore>;

/// `localStorage` when available, otherwise an in-memory store that does not
/// survive a reload.
pub fn session_backend() -> Backend {
    match BrowserStore::local() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("{}; sessions will not persist", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// `setTimeout` wrapped in a promise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .ok()
            });
            if scheduled.is_none() {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}

/// A `File` from an `<input type="file">` or a drop event.
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl ImageSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, AppError> {
        let array_buffer: ArrayBuffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| AppError::ReadFailed(js_error(&e)))?
            .dyn_into()
            .map_err(|_| AppError::ReadFailed("not an ArrayBuffer".to_string()))?;
        Ok(Uint8Array::new(&array_buffer).to_vec())
    }
}

/// Local hour of day, 0..=23.
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// Seed for the analysis RNG.
pub fn random_seed() -> u64 {
    let entropy = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    entropy ^ (js_sys::Date::now() as u64).rotate_left(32)
}

/// Show an error to the user as a blocking notification.
pub fn report(err: AppError) {
    if !err.is_user_error() {
        error!("{}", err);
    }
    let message = String::from(err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
