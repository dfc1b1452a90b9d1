//! Config Missing Component

use leptos::prelude::*;

/// Rendered instead of the app when the bundle was built without backend settings
#[component]
pub fn ConfigMissing(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container mt-5">
            <h3>"Backend not configured"</h3>
            <p class="text-danger">{message}</p>
            <p>"Rebuild with SUPABASE_URL and SUPABASE_ANON_KEY set."</p>
        </div>
    }
}
