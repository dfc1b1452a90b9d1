//! Todo Form Component
//!
//! Shared input for creating a todo or updating the one being edited.

use leptos::prelude::*;
use supatodo_core::board::{Submission, TodoList};

#[component]
pub fn TodoForm(
    board: RwSignal<TodoList>,
    #[prop(into)] on_submit: Callback<Submission>,
) -> impl IntoView {
    let mode = move || board.with(TodoList::mode);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is a no-op
        if let Some(submission) = board.with_untracked(TodoList::submission) {
            on_submit.run(submission);
        }
    };

    view! {
        <form class="mb-4" on:submit=submit>
            <div class="input-group mt-5">
                <input
                    type="text"
                    class="form-control"
                    required
                    placeholder=move || mode().placeholder()
                    prop:value=move || board.with(|b| b.input().to_string())
                    on:input=move |ev| board.update(|b| b.set_input(event_target_value(&ev)))
                />
                <button type="submit" class="btn btn-primary">
                    {move || mode().submit_label()}
                </button>
            </div>
        </form>
    }
}
