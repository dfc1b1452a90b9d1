//! Identity and Session
//!
//! The authenticated user handle and the in-memory session built around it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record issued by the auth service (extra fields are ignored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

impl Identity {
    /// Greeting name: the part of the email before `@`, then before the first `.`
    pub fn display_name(&self) -> &str {
        let local = self.email.split('@').next().unwrap_or_default();
        local.split('.').next().unwrap_or_default()
    }
}

/// Explicit session context handed from the login screen to the dashboard.
///
/// Lives only in memory: reloading the page drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    /// Missing when sign-up still waits for email confirmation
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(identity: Identity, access_token: Option<String>) -> Self {
        Self { identity, access_token }
    }

    /// Token to send as bearer credentials, falling back to the anon key
    pub fn bearer<'a>(&'a self, anon_key: &'a str) -> &'a str {
        self.access_token.as_deref().unwrap_or(anon_key)
    }
}

/// Optional profile attributes attached at sign-up (`user_metadata`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Profile {
    /// Build from raw form fields; blank fields are left out
    pub fn from_fields(name: &str, phone: &str) -> Self {
        fn non_blank(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Self {
            name: non_blank(name),
            phone: non_blank(phone),
        }
    }
}
