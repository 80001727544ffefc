//! Top-level application state.
//!
//! [`AppController`] owns the session, upload and analysis state and is the
//! only thing UI handlers mutate. After each change it hands a [`Snapshot`]
//! to the registered observer, which the UI renders from.
//!
//! The two suspending operations, [`select_file`] and [`analyze`], take the
//! controller as a `RefCell` and release the borrow while they wait.

use std::cell::RefCell;

use rand::rngs::StdRng;
use tracing::debug;

use super::analysis::{AnalysisSimulator, AnalysisTicket, Delay, NutritionResult};
use super::greeting::{format_greeting, Greeting};
use super::session::{SessionStore, UserRecord};
use super::upload::{DecodeTicket, ImageSource, SelectedImage, UploadController};
use super::view::{derive_view, AuthForm, ViewState};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::storage::KeyValueStore;

/// Everything the UI needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub view: ViewState,
    /// Display name; `None` while logged out.
    pub user_name: Option<String>,
    /// Data URI of the selected image.
    pub preview: Option<String>,
    pub result: Option<&'static NutritionResult>,
}

impl Snapshot {
    /// Greeting for the logged-in user at `hour`; None while logged out.
    pub fn greeting(&self, hour: u32) -> Option<Greeting> {
        self.user_name
            .as_deref()
            .map(|name| format_greeting(hour, name))
    }
}

type Observer = Box<dyn Fn(&Snapshot)>;

pub struct AppController<S> {
    config: AppConfig,
    session: SessionStore<S>,
    upload: UploadController,
    analysis: AnalysisSimulator,
    auth_form: AuthForm,
    rng: StdRng,
    observer: Option<Observer>,
}

impl<S: KeyValueStore> AppController<S> {
    pub fn new(store: S, config: AppConfig, rng: StdRng) -> Self {
        let session = SessionStore::new(store, config.session_key.clone(), config.min_password_len);
        Self {
            config,
            session,
            upload: UploadController::new(),
            analysis: AnalysisSimulator::new(),
            auth_form: AuthForm::default(),
            rng,
            observer: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn upload(&self) -> &UploadController {
        &self.upload
    }

    pub fn analysis(&self) -> &AnalysisSimulator {
        &self.analysis
    }

    /// Register the change listener and push the current state to it.
    pub fn set_observer(&mut self, observer: impl Fn(&Snapshot) + 'static) {
        self.observer = Some(Box::new(observer));
        self.notify();
    }

    pub fn view(&self) -> ViewState {
        derive_view(
            self.session.is_logged_in(),
            self.auth_form,
            self.upload.state(),
            self.analysis.state(),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        let view = self.view();
        Snapshot {
            user_name: self
                .session
                .is_logged_in()
                .then(|| self.session.display_name()),
            preview: self.upload.image().map(|image| image.data_uri.clone()),
            result: if view.results_shown {
                self.analysis.result()
            } else {
                None
            },
            view,
        }
    }

    pub fn show_login(&mut self) {
        self.auth_form = AuthForm::Login;
        self.notify();
    }

    pub fn show_signup(&mut self) {
        self.auth_form = AuthForm::Signup;
        self.notify();
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let record = self.session.login(email, password)?;
        self.notify();
        Ok(record)
    }

    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let record = self.session.signup(name, email, password)?;
        self.notify();
        Ok(record)
    }

    /// Drop the session together with any image and result.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.upload.reset();
        self.analysis.clear();
        let outcome = self.session.logout();
        self.notify();
        outcome
    }

    pub fn begin_file_select(&self, media_type: &str) -> Result<DecodeTicket, AppError> {
        self.upload.begin_select(media_type)
    }

    /// Install a decoded image; any previous result is discarded.
    pub fn finish_file_select(&mut self, ticket: DecodeTicket, image: SelectedImage) -> bool {
        if !self.upload.finish_select(ticket, image) {
            return false;
        }
        self.analysis.clear();
        self.notify();
        true
    }

    pub fn reset_upload(&mut self) {
        self.upload.reset();
        self.analysis.clear();
        self.notify();
    }

    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        let ticket = self.analysis.begin(self.upload.has_image())?;
        self.notify();
        Some(ticket)
    }

    pub fn finish_analysis(&mut self, ticket: AnalysisTicket) -> Option<&'static NutritionResult> {
        let result = self.analysis.complete(ticket, &mut self.rng)?;
        self.notify();
        Some(result)
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            debug!("View changed: {:?}", snapshot.view);
            observer(&snapshot);
        }
    }
}

/// Validate, read and install `file`.
/// Returns `Ok(false)` when a reset happened while the file was being read.
pub async fn select_file<S, F>(controller: &RefCell<AppController<S>>, file: &F) -> Result<bool, AppError>
where
    S: KeyValueStore,
    F: ImageSource,
{
    let media_type = file.media_type();
    let ticket = controller.borrow().begin_file_select(&media_type)?;
    debug!("Reading {}", file.name());
    let bytes = file.read_bytes().await?;
    let image = SelectedImage::from_bytes(&media_type, &bytes);
    Ok(controller.borrow_mut().finish_file_select(ticket, image))
}

/// Run one simulated analysis. None if it could not start or went stale.
pub async fn analyze<S, D>(controller: &RefCell<AppController<S>>, delay: &D) -> Option<&'static NutritionResult>
where
    S: KeyValueStore,
    D: Delay,
{
    let (ticket, latency) = {
        let mut ctl = controller.borrow_mut();
        let ticket = ctl.begin_analysis()?;
        (ticket, ctl.config().analysis_latency())
    };
    delay.sleep(latency).await;
    controller.borrow_mut().finish_analysis(ticket)
}
