//! NutritionTrack: a browser demo that "analyzes" meal photos.
//!
//! [`state`] holds all behavior and runs natively; [`app`], [`pages`] and
//! [`components`] render it with Leptos, and [`browser`] adapts browser APIs
//! to the state core.

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod state;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, StorageError, ValidationError};
pub use storage::{KeyValueStore, MemoryStore};
