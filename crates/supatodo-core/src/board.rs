//! Todo Board
//!
//! Local view state of the dashboard and the store calls that change it.
//!
//! Every user action becomes an [`Action`]; [`perform`] turns it into exactly
//! one store call and, on success, a [`Change`] that [`TodoList::apply`]
//! folds into local state. Failures produce no `Change`, so the list, the
//! input and the edit draft stay exactly as they were.
//!
//! Responses are applied in arrival order with no version check: two racing
//! edits end with whichever answered last, and the list can drift from the
//! store until the next load.

use crate::backend::TodoStore;
use crate::domain::{NewTodo, Session, TodoId, TodoItem, TodoPatch};
use crate::error::{BackendError, BackendResult};

pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_TEXT: &str = "No todos yet! Add some todos.";

/// What submitting the shared input does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    /// Editing the item with this ID
    Editing(TodoId),
}

impl FormMode {
    pub fn placeholder(self) -> &'static str {
        match self {
            FormMode::Creating => "Add a new todo...",
            FormMode::Editing(_) => "Update your todo...",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Creating => "Add Todo",
            FormMode::Editing(_) => "Update Todo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Store request derived from the input and the form mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create { task: String },
    Update { id: TodoId, task: String },
}

/// A user-triggered operation against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    Submit(Submission),
    Toggle { id: TodoId, current: bool },
    Delete(TodoId),
}

/// Successful outcome of an [`Action`]
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Loaded(Vec<TodoItem>),
    Created(TodoItem),
    CompletionSet { id: TodoId, is_complete: bool },
    TaskReplaced { id: TodoId, task: String },
    Removed(TodoId),
}

impl Action {
    /// User-facing text for a failed action
    pub fn failure_message(&self, err: &BackendError) -> String {
        let what = match self {
            Action::Load => "fetching todos",
            Action::Submit(Submission::Create { .. }) => "adding todo",
            Action::Submit(Submission::Update { .. }) => "updating todo",
            Action::Toggle { .. } => "updating todo status",
            Action::Delete(_) => "deleting todo",
        };
        format!("Error {}: {}", what, err)
    }
}

/// Issue the single store call behind `action`
pub async fn perform<S: TodoStore + ?Sized>(
    store: &S,
    session: &Session,
    action: &Action,
) -> BackendResult<Change> {
    match action {
        Action::Load => store.list(session).await.map(Change::Loaded),
        Action::Submit(Submission::Create { task }) => {
            let todo = NewTodo::new(task.clone(), session.identity.id);
            store.insert(session, &todo).await.map(Change::Created)
        }
        Action::Submit(Submission::Update { id, task }) => {
            store.update(session, *id, &TodoPatch::task(task.clone())).await?;
            Ok(Change::TaskReplaced {
                id: *id,
                task: task.clone(),
            })
        }
        Action::Toggle { id, current } => {
            let is_complete = !current;
            store.update(session, *id, &TodoPatch::completion(is_complete)).await?;
            Ok(Change::CompletionSet { id: *id, is_complete })
        }
        Action::Delete(id) => {
            store.delete(session, *id).await?;
            Ok(Change::Removed(*id))
        }
    }
}

/// Dashboard state: items newest first, the shared input and the form mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    load: LoadState,
    input: String,
    mode: FormMode,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Start editing `item`, silently dropping any draft in progress
    pub fn begin_edit(&mut self, item: &TodoItem) {
        self.mode = FormMode::Editing(item.id);
        self.input = item.task.clone();
    }

    /// Record a failed load; the list stays empty
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    /// Dispatch rule for the form: create or update depending on the mode.
    /// Blank input submits nothing.
    pub fn submission(&self) -> Option<Submission> {
        if self.input.trim().is_empty() {
            return None;
        }
        let task = self.input.clone();
        Some(match self.mode {
            FormMode::Creating => Submission::Create { task },
            FormMode::Editing(id) => Submission::Update { id, task },
        })
    }

    /// Status line shown instead of the list, if any
    pub fn status_message(&self) -> Option<String> {
        match &self.load {
            LoadState::Loading => Some(LOADING_TEXT.to_string()),
            LoadState::Failed(message) => Some(format!("Could not load todos: {}", message)),
            LoadState::Ready if self.items.is_empty() => Some(EMPTY_TEXT.to_string()),
            LoadState::Ready => None,
        }
    }

    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Loaded(items) => {
                self.items = items;
                self.load = LoadState::Ready;
            }
            Change::Created(item) => {
                self.items.insert(0, item);
                self.input.clear();
            }
            Change::CompletionSet { id, is_complete } => {
                if let Some(item) = self.find_mut(id) {
                    item.is_complete = is_complete;
                }
            }
            Change::TaskReplaced { id, task } => {
                if let Some(item) = self.find_mut(id) {
                    item.task = task;
                }
                self.input.clear();
                self.mode = FormMode::Creating;
            }
            Change::Removed(id) => self.items.retain(|item| item.id != id),
        }
    }

    fn find_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn make_item(id: i64, task: &str) -> TodoItem {
        TodoItem {
            id: TodoId(id),
            task: task.to_string(),
            is_complete: false,
            user_id: Uuid::from_u128(1),
            inserted_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32).unwrap()),
        }
    }

    fn loaded(items: Vec<TodoItem>) -> TodoList {
        let mut list = TodoList::new();
        list.apply(Change::Loaded(items));
        list
    }

    #[test]
    fn test_status_messages() {
        let mut list = TodoList::new();
        assert_eq!(list.status_message().as_deref(), Some(LOADING_TEXT));

        list.apply(Change::Loaded(vec![]));
        assert_eq!(list.status_message().as_deref(), Some(EMPTY_TEXT));

        let list = loaded(vec![make_item(1, "one")]);
        assert_eq!(list.status_message(), None);
    }

    #[test]
    fn test_load_failure_is_not_the_empty_state() {
        let mut list = TodoList::new();
        list.load_failed("network error");
        assert_eq!(list.items().len(), 0);
        assert_eq!(
            list.status_message().as_deref(),
            Some("Could not load todos: network error")
        );
    }

    #[test]
    fn test_blank_input_submits_nothing() {
        let mut list = loaded(vec![]);
        list.set_input("   \t");
        assert_eq!(list.submission(), None);
        assert_eq!(list.input(), "   \t");
    }

    #[test]
    fn test_submission_follows_mode() {
        let item = make_item(3, "draft me");
        let mut list = loaded(vec![item.clone()]);

        list.set_input("new task");
        assert_eq!(list.submission(), Some(Submission::Create { task: "new task".into() }));

        list.begin_edit(&item);
        assert_eq!(list.input(), "draft me");
        assert_eq!(list.mode(), FormMode::Editing(TodoId(3)));
        assert_eq!(
            list.submission(),
            Some(Submission::Update { id: TodoId(3), task: "draft me".into() })
        );
    }

    #[test]
    fn test_begin_edit_replaces_previous_draft() {
        let first = make_item(1, "first");
        let second = make_item(2, "second");
        let mut list = loaded(vec![second.clone(), first.clone()]);

        list.begin_edit(&first);
        list.set_input("half typed");
        list.begin_edit(&second);

        assert_eq!(list.mode(), FormMode::Editing(TodoId(2)));
        assert_eq!(list.input(), "second");
    }

    #[test]
    fn test_created_item_goes_first() {
        let mut list = loaded(vec![make_item(1, "old")]);
        list.set_input("fresh");
        list.apply(Change::Created(make_item(2, "fresh")));

        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![TodoId(2), TodoId(1)]);
        assert_eq!(list.input(), "");
    }

    #[test]
    fn test_completion_keeps_order() {
        let mut list = loaded(vec![make_item(2, "b"), make_item(1, "a")]);
        list.apply(Change::CompletionSet { id: TodoId(1), is_complete: true });

        assert_eq!(list.items()[0].id, TodoId(2));
        assert!(!list.items()[0].is_complete);
        assert!(list.items()[1].is_complete);
    }

    #[test]
    fn test_task_replaced_clears_draft() {
        let item = make_item(5, "before");
        let mut list = loaded(vec![item.clone()]);
        list.begin_edit(&item);
        list.set_input("after");
        list.apply(Change::TaskReplaced { id: TodoId(5), task: "after".into() });

        assert_eq!(list.items()[0].task, "after");
        assert_eq!(list.mode(), FormMode::Creating);
        assert_eq!(list.input(), "");
    }

    #[test]
    fn test_removed_only_matching_item() {
        let mut list = loaded(vec![make_item(3, "c"), make_item(2, "b"), make_item(1, "a")]);
        list.apply(Change::Removed(TodoId(2)));

        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![TodoId(3), TodoId(1)]);
    }

    #[test]
    fn test_failure_messages() {
        let err = BackendError::Api { status: 500, message: "network error".into() };
        let create = Action::Submit(Submission::Create { task: "x".into() });
        assert_eq!(create.failure_message(&err), "Error adding todo: network error");
        assert_eq!(
            Action::Toggle { id: TodoId(1), current: false }.failure_message(&err),
            "Error updating todo status: network error"
        );
        assert_eq!(Action::Delete(TodoId(1)).failure_message(&err), "Error deleting todo: network error");
        assert_eq!(Action::Load.failure_message(&err), "Error fetching todos: network error");
    }

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::Creating.placeholder(), "Add a new todo...");
        assert_eq!(FormMode::Editing(TodoId(1)).placeholder(), "Update your todo...");
        assert_eq!(FormMode::Creating.submit_label(), "Add Todo");
        assert_eq!(FormMode::Editing(TodoId(1)).submit_label(), "Update Todo");
    }
}
