//! Login Prompt Component
//!
//! Shown on `/dashboard` when no session is held in memory.

use leptos::prelude::*;

use crate::routes::{navigate, Route};
use crate::store::use_app_store;

#[component]
pub fn LoginPrompt() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="d-flex justify-content-center align-items-center" style="height: 100vh;">
            <div class="text-center">
                <p>"Please login to view the dashboard."</p>
                <button class="btn btn-primary" on:click=move |_| navigate(store, Route::Gate)>
                    "Go to Login"
                </button>
            </div>
        </div>
    }
}
