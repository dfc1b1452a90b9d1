//! Routes
//!
//! Two screens addressed by path. The session is never part of the URL, so
//! opening `/dashboard` directly lands on the login prompt.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::store::{AppStateStoreFields, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Login / signup form at `/`
    #[default]
    Gate,
    /// Todo list at `/dashboard`
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Gate => "/",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Unknown paths fall back to the login form
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/dashboard" => Route::Dashboard,
            _ => Route::Gate,
        }
    }

    /// Route for the browser's current location
    pub fn current() -> Self {
        window()
            .location()
            .pathname()
            .map(|path| Self::from_path(&path))
            .unwrap_or_default()
    }
}

/// Switch screens and push a history entry for the new path
pub fn navigate(store: AppStore, route: Route) {
    match window().history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("[routes] pushState failed: {:?}", err);
            }
        }
        Err(err) => log::warn!("[routes] no history: {:?}", err),
    }
    store.route().set(route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Gate);
        assert_eq!(Route::from_path(""), Route::Gate);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/elsewhere"), Route::Gate);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Gate, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
