//! Session Gate Component
//!
//! Combined login/signup form. Errors from the auth service are shown inline
//! and the entered values stay in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use supatodo_core::gate::{authenticate, AuthForm, AuthMode};

use crate::context::use_backend;
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn SessionGate() -> impl IntoView {
    let store = use_app_store();
    let backend = StoredValue::new_local(use_backend());

    let form = RwSignal::new(AuthForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let is_signup = move || form.with(|f| f.mode == AuthMode::Signup);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.with_untracked(AuthForm::request) else {
            return;
        };
        let auth = backend.get_value();
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            let result = authenticate(&auth, &request).await;
            set_pending.set(false);
            match result {
                Ok(session) => store_sign_in(store, session),
                Err(err) => {
                    log::warn!("[gate] authentication failed: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="d-flex align-items-center justify-content-center bg-white" style="height: 100vh;">
            <div class="px-5 pt-4 pb-5 text-dark shadow-lg border" style="border-radius: 15px;">
                <span class="text-center d-flex align-item-center justify-content-center">
                    <img src="/logo.svg" width="60" alt="Logo" />
                </span>
                <h3 class="mb-1 mt-3">"to-do using supabase"</h3>
                <hr />

                <form on:submit=on_submit>
                    // Profile fields only exist in signup mode
                    <Show when=is_signup>
                        <div class="mb-3">
                            <label for="name" class="form-label">"Name (optional)"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="name"
                                placeholder="Enter name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label for="phone" class="form-label">"Phone (optional)"</label>
                            <input
                                type="tel"
                                class="form-control"
                                id="phone"
                                placeholder="Enter phone"
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="mb-3">
                        <label for="email" class="form-label">"Email address"</label>
                        <input
                            type="email"
                            class="form-control"
                            id="email"
                            placeholder="Enter email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-3">
                        <label for="password" class="form-label">"Password"</label>
                        <input
                            type="password"
                            class="form-control"
                            id="password"
                            placeholder="Enter password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="alert alert-danger py-2" role="alert">{message}</div>
                    })}

                    <button
                        type="submit"
                        class="btn btn-outline-secondary btn-sm w-100 mt-3"
                        disabled=move || pending.get()
                    >
                        {move || form.with(|f| f.mode.submit_label())}
                    </button>
                </form>

                <button
                    class="btn btn-outline-secondary btn-sm w-100 mt-3 switch-button"
                    on:click=move |_| form.update(AuthForm::toggle_mode)
                >
                    {move || form.with(|f| f.mode.switch_label())}
                </button>
            </div>
        </div>
    }
}
