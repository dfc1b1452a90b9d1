//! Backend Collaborator - Core Traits
//!
//! Abstract interfaces for the hosted auth service and the todo table.
//! `SupabaseClient` talks to the real thing; tests use in-memory fakes.
//!
//! Browser futures are not `Send`, so the traits opt out of that bound.

mod supabase;

use async_trait::async_trait;

use crate::domain::{NewTodo, Profile, Session, TodoId, TodoItem, TodoPatch};
use crate::error::BackendResult;

pub use supabase::SupabaseClient;

/// Identity operations
#[async_trait(?Send)]
pub trait AuthService {
    /// Verify an email/password pair
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session>;

    /// Create a new account with optional profile attributes
    async fn sign_up(&self, email: &str, password: &str, profile: &Profile) -> BackendResult<Session>;

    /// End the session on the server side
    async fn sign_out(&self, session: &Session) -> BackendResult<()>;
}

/// Single-table record store, scoped to the session's identity
#[async_trait(?Send)]
pub trait TodoStore {
    /// Rows owned by the session identity, newest first
    async fn list(&self, session: &Session) -> BackendResult<Vec<TodoItem>>;

    /// Insert a row and return it with store-assigned fields
    async fn insert(&self, session: &Session, todo: &NewTodo) -> BackendResult<TodoItem>;

    /// Apply a partial update by ID
    async fn update(&self, session: &Session, id: TodoId, patch: &TodoPatch) -> BackendResult<()>;

    /// Delete a row by ID
    async fn delete(&self, session: &Session, id: TodoId) -> BackendResult<()>;
}
