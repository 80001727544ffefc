//! DOM-free application state: session, greeting, upload, analysis and the
//! controller that derives the visible view from them.

pub mod analysis;
pub mod controller;
pub mod greeting;
pub mod session;
pub mod upload;
pub mod view;

pub use analysis::{AnalysisState, Delay, NutritionResult, NUTRITION_TABLE};
pub use controller::{analyze, select_file, AppController, Snapshot};
pub use greeting::{format_greeting, Greeting, TimeOfDay};
pub use session::{SessionStore, UserRecord};
pub use upload::{ImageSource, SelectedImage, UploadState};
pub use view::{AuthForm, Screen, UploadSection, ViewState};
