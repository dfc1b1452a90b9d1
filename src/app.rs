//! Supatodo Frontend App
//!
//! Picks the screen for the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use supatodo_core::domain::Session;
use supatodo_core::BackendConfig;

use crate::components::{Dashboard, LoginPrompt, SessionGate};
use crate::context::provide_backend;
use crate::routes::Route;
use crate::store::{AppState, AppStateStoreFields};

/// What the app body renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Gate,
    /// Only this screen talks to the todo store
    Dashboard(Session),
    /// `/dashboard` without a session in memory
    LoginPrompt,
}

pub fn screen(route: Route, session: Option<&Session>) -> Screen {
    match (route, session) {
        (Route::Gate, _) => Screen::Gate,
        (Route::Dashboard, Some(session)) => Screen::Dashboard(session.clone()),
        (Route::Dashboard, None) => Screen::LoginPrompt,
    }
}

#[component]
pub fn App(config: BackendConfig) -> impl IntoView {
    provide_backend(config);

    let store = Store::new(AppState::new());
    provide_context(store);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| {
        store.route().set(Route::current());
    });

    view! {
        <div class="app-layout">
            {move || {
                let route = store.route().get();
                match store.session().with(|session| screen(route, session.as_ref())) {
                    Screen::Gate => view! { <SessionGate /> }.into_any(),
                    Screen::Dashboard(session) => view! { <Dashboard session=session /> }.into_any(),
                    Screen::LoginPrompt => view! { <LoginPrompt /> }.into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supatodo_core::domain::Identity;
    use uuid::Uuid;

    fn session() -> Session {
        Session::new(
            Identity {
                id: Uuid::from_u128(1),
                email: "jane@example.com".into(),
            },
            Some("jwt".into()),
        )
    }

    #[test]
    fn test_dashboard_without_session_shows_prompt() {
        assert_eq!(screen(Route::Dashboard, None), Screen::LoginPrompt);
    }

    #[test]
    fn test_dashboard_gets_the_stored_session() {
        let session = session();
        assert_eq!(screen(Route::Dashboard, Some(&session)), Screen::Dashboard(session.clone()));
    }

    #[test]
    fn test_gate_ignores_session() {
        assert_eq!(screen(Route::Gate, None), Screen::Gate);
        assert_eq!(screen(Route::Gate, Some(&session())), Screen::Gate);
    }
}
