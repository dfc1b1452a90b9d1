//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use supatodo_core::domain::Session;

use crate::routes::Route;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen currently shown
    pub route: Route,
    /// Set by the login screen, cleared on log out. Never persisted.
    pub session: Option<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::current(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remember the session and go to the dashboard
pub fn store_sign_in(store: AppStore, session: Session) {
    log::info!("[app] signed in as {}", session.identity.email);
    store.session().set(Some(session));
    crate::routes::navigate(store, Route::Dashboard);
}

/// Leave the dashboard, then forget the session
pub fn store_sign_out(store: AppStore) {
    crate::routes::navigate(store, Route::Gate);
    store.session().set(None);
    log::info!("[app] signed out");
}
