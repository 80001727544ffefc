use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::browser::{self, Backend};
use crate::config::AppConfig;
use crate::logging;
use crate::pages::auth::AuthPage;
use crate::pages::dashboard::DashboardPage;
use crate::state::{AppController, Screen, Snapshot};

pub type SharedController = Rc<RefCell<AppController<Backend>>>;

/// Shared with every component through context.
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<SharedController, LocalStorage>,
    /// Latest state published by the controller.
    pub snapshot: ReadSignal<Snapshot>,
}

impl AppContext {
    pub fn controller(&self) -> SharedController {
        self.controller.get_value()
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App() -> impl IntoView {
    let log_filter = logging::init();
    info!("NutritionTrack starting");
    let store = browser::session_backend();
    let config = AppConfig::load(&store);
    if let Some(handle) = &log_filter {
        logging::apply_filter(handle, &config.log_filter);
    }

    let rng = StdRng::seed_from_u64(browser::random_seed());
    let controller = Rc::new(RefCell::new(AppController::new(store, config, rng)));
    let (snapshot, set_snapshot) = signal(controller.borrow().snapshot());
    controller
        .borrow_mut()
        .set_observer(move |next| set_snapshot.set(next.clone()));

    provide_context(AppContext {
        controller: StoredValue::new_local(controller),
        snapshot,
    });

    let screen = Memo::new(move |_| snapshot.with(|s| s.view.screen));

    view! {
        <div class="app-shell">
            {move || match screen.get() {
                Screen::Auth => view! { <AuthPage /> }.into_any(),
                Screen::Main => view! { <DashboardPage /> }.into_any(),
            }}
        </div>
    }
}
