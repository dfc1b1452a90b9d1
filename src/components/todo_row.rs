//! Todo Row Component
//!
//! One todo in the list: checkbox, text, edit and delete buttons.

use leptos::prelude::*;
use supatodo_core::domain::{TodoId, TodoItem};

#[component]
pub fn TodoRow(
    item: TodoItem,
    /// Receives the ID and the flag as currently shown
    #[prop(into)] on_toggle: Callback<(TodoId, bool)>,
    #[prop(into)] on_edit: Callback<TodoItem>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = item.id;
    let completed = item.is_complete;
    let task = item.task.clone();

    let row_class = if completed {
        "list-group-item d-flex justify-content-between align-items-center p-3 list-group-item-success"
    } else {
        "list-group-item d-flex justify-content-between align-items-center p-3 list-group-item-info"
    };

    view! {
        <li class=row_class>
            <div class="d-flex align-items-center">
                <input
                    type="checkbox"
                    class="me-2"
                    prop:checked=completed
                    on:change=move |ev| {
                        // Keep showing the stored flag; a successful update re-renders the row
                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(completed);
                        on_toggle.run((id, completed));
                    }
                />
                <span>" " {task} " "</span>
            </div>

            <div class="btn-group">
                <button class="btn btn-warning btn-sm me-2" on:click=move |_| on_edit.run(item.clone())>
                    "Edit"
                </button>
                <button class="btn btn-danger btn-sm" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
