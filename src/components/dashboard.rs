//! Dashboard Component
//!
//! The todo list for one session. Loads once on mount; every later change
//! is one store call whose result is folded into local state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use supatodo_core::board::{perform, Action, Submission, TodoList};
use supatodo_core::domain::{Session, TodoId, TodoItem};
use supatodo_core::gate::sign_out_failure;
use supatodo_core::AuthService;

use super::{TodoForm, TodoRow};
use crate::context::use_backend;
use crate::dialog::alert;
use crate::store::{store_sign_out, use_app_store};

#[component]
pub fn Dashboard(session: Session) -> impl IntoView {
    let store = use_app_store();
    let backend = StoredValue::new_local(use_backend());
    let greeting = session.identity.display_name().to_string();
    let session = StoredValue::new(session);

    let board = RwSignal::new(TodoList::new());

    // One request per action; local state only changes on success
    let run = move |action: Action| {
        let api = backend.get_value();
        let session = session.get_value();
        spawn_local(async move {
            match perform(&api, &session, &action).await {
                Ok(change) => board.update(|b| b.apply(change)),
                Err(err) => {
                    let message = action.failure_message(&err);
                    if action == Action::Load {
                        log::error!("[dashboard] {}", message);
                        board.update(|b| b.load_failed(err.to_string()));
                    } else {
                        log::warn!("[dashboard] {}", message);
                        alert(&message);
                    }
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| run(Action::Load));

    let log_out = move |_| {
        let api = backend.get_value();
        let current = session.get_value();
        spawn_local(async move {
            match api.sign_out(&current).await {
                Ok(()) => store_sign_out(store),
                Err(err) => {
                    let message = sign_out_failure(&err);
                    log::warn!("[dashboard] {}", message);
                    alert(&message);
                }
            }
        });
    };

    view! {
        <div class="container mt-5">
            <div class="d-flex justify-content-between">
                <h3>"Welcome " <span class="display-5">{greeting}</span></h3>
                <button class="btn btn-outline-danger mb-4" on:click=log_out>
                    "Log Out"
                </button>
            </div>
            <hr />

            <TodoForm board=board on_submit=move |submission: Submission| run(Action::Submit(submission)) />

            {move || match board.with(TodoList::status_message) {
                Some(text) => view! { <p class="mt-5 display-6">{text}</p> }.into_any(),
                None => view! {
                    <div class="todo-list">
                        <h4 class="mt-5 display-6">"Your Todos"</h4>
                        <ul class="list-group m-5 fs-4">
                            <For
                                each=move || board.with(|b| b.items().to_vec())
                                key=|item| (item.id, item.is_complete, item.task.clone())
                                children=move |item| view! {
                                    <TodoRow
                                        item=item
                                        on_toggle=move |(id, current): (TodoId, bool)| run(Action::Toggle { id, current })
                                        on_edit=move |item: TodoItem| board.update(|b| b.begin_edit(&item))
                                        on_delete=move |id: TodoId| run(Action::Delete(id))
                                    />
                                }
                            />
                        </ul>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
