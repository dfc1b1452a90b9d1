//! Supabase Client
//!
//! `AuthService` and `TodoStore` over Supabase's REST endpoints
//! (`auth/v1` for identities, `rest/v1` for the table). One request per call,
//! no retries and no timeouts.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{AuthService, TodoStore};
use crate::config::BackendConfig;
use crate::domain::{Identity, NewTodo, Profile, Session, TodoId, TodoItem, TodoPatch};
use crate::error::{BackendError, BackendResult};

/// HTTP client for one Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    config: BackendConfig,
}

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a Profile,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: Identity,
}

/// Sign-up answers with a full session, or with the bare user while the
/// address still needs confirming.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    PendingConfirmation(Identity),
}

impl SignUpResponse {
    fn into_session(self) -> Session {
        match self {
            SignUpResponse::Session(token) => Session::new(token.user, Some(token.access_token)),
            SignUpResponse::PendingConfirmation(user) => Session::new(user, None),
        }
    }
}

// ========================
// URL Building
// ========================

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| BackendError::Decode(format!("bad endpoint {}: {}", path, e)))
    }

    pub(crate) fn sign_in_url(&self) -> BackendResult<Url> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }

    pub(crate) fn sign_up_url(&self) -> BackendResult<Url> {
        self.endpoint("auth/v1/signup")
    }

    pub(crate) fn sign_out_url(&self) -> BackendResult<Url> {
        self.endpoint("auth/v1/logout")
    }

    fn table_url(&self) -> BackendResult<Url> {
        self.endpoint(&format!("rest/v1/{}", self.config.table))
    }

    pub(crate) fn list_url(&self, session: &Session) -> BackendResult<Url> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("user_id", &format!("eq.{}", session.identity.id))
            .append_pair("order", "inserted_at.desc");
        Ok(url)
    }

    pub(crate) fn insert_url(&self) -> BackendResult<Url> {
        self.table_url()
    }

    pub(crate) fn row_url(&self, id: TodoId) -> BackendResult<Url> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));
        Ok(url)
    }

    // ========================
    // Request Helpers
    // ========================

    fn auth_request(&self, url: Url) -> RequestBuilder {
        self.http.post(url).header("apikey", &self.config.anon_key)
    }

    fn authorized(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(session.bearer(&self.config.anon_key))
    }

    async fn checked(builder: RequestBuilder) -> BackendResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = BackendError::from_response(status.as_u16(), status.canonical_reason(), &body);
        log::warn!("[supabase] request failed with {}: {}", status, err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> BackendResult<T> {
        let response = Self::checked(builder).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(builder: RequestBuilder) -> BackendResult<()> {
        Self::checked(builder).await.map(|_| ())
    }
}

// ========================
// Trait Implementations
// ========================

#[async_trait(?Send)]
impl AuthService for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        log::debug!("[supabase] sign in {}", email);
        let request = self
            .auth_request(self.sign_in_url()?)
            .json(&PasswordCredentials { email, password });
        let token: TokenResponse = Self::send_json(request).await?;
        Ok(Session::new(token.user, Some(token.access_token)))
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &Profile) -> BackendResult<Session> {
        log::debug!("[supabase] sign up {}", email);
        let request = self.auth_request(self.sign_up_url()?).json(&SignUpBody {
            email,
            password,
            data: profile,
        });
        let response: SignUpResponse = Self::send_json(request).await?;
        Ok(response.into_session())
    }

    async fn sign_out(&self, session: &Session) -> BackendResult<()> {
        let Some(token) = session.access_token.as_deref() else {
            log::debug!("[supabase] no access token, nothing to revoke");
            return Ok(());
        };
        let request = self.auth_request(self.sign_out_url()?).bearer_auth(token);
        Self::send_empty(request).await
    }
}

#[async_trait(?Send)]
impl TodoStore for SupabaseClient {
    async fn list(&self, session: &Session) -> BackendResult<Vec<TodoItem>> {
        let request = self.authorized(self.http.get(self.list_url(session)?), session);
        let rows: Vec<TodoItem> = Self::send_json(request).await?;
        log::debug!("[supabase] loaded {} rows", rows.len());
        Ok(rows)
    }

    async fn insert(&self, session: &Session, todo: &NewTodo) -> BackendResult<TodoItem> {
        let request = self
            .authorized(self.http.post(self.insert_url()?), session)
            .header("Prefer", "return=representation")
            .json(std::slice::from_ref(todo));
        let rows: Vec<TodoItem> = Self::send_json(request).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("insert returned no rows".to_string()))
    }

    async fn update(&self, session: &Session, id: TodoId, patch: &TodoPatch) -> BackendResult<()> {
        let request = self
            .authorized(self.http.patch(self.row_url(id)?), session)
            .json(patch);
        Self::send_empty(request).await
    }

    async fn delete(&self, session: &Session, id: TodoId) -> BackendResult<()> {
        let request = self.authorized(self.http.delete(self.row_url(id)?), session);
        Self::send_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn client() -> SupabaseClient {
        SupabaseClient::new(BackendConfig::new("https://demo.supabase.co", "anon").unwrap())
    }

    fn session() -> Session {
        Session::new(
            Identity {
                id: Uuid::from_u128(0xabc),
                email: "jane@example.com".into(),
            },
            Some("jwt".into()),
        )
    }

    #[test]
    fn test_auth_urls() {
        let client = client();
        assert_eq!(
            client.sign_in_url().unwrap().as_str(),
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(client.sign_up_url().unwrap().as_str(), "https://demo.supabase.co/auth/v1/signup");
        assert_eq!(client.sign_out_url().unwrap().as_str(), "https://demo.supabase.co/auth/v1/logout");
    }

    #[test]
    fn test_list_url_filters_by_owner_newest_first() {
        let url = client().list_url(&session()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/rest/v1/todos?select=*&user_id=eq.00000000-0000-0000-0000-000000000abc&order=inserted_at.desc"
        );
    }

    #[test]
    fn test_row_url_uses_configured_table() {
        let config = BackendConfig::new("https://demo.supabase.co/", "anon").unwrap().with_table("tasks");
        let client = SupabaseClient::new(config);
        assert_eq!(
            client.row_url(TodoId(9)).unwrap().as_str(),
            "https://demo.supabase.co/rest/v1/tasks?id=eq.9"
        );
        assert_eq!(client.insert_url().unwrap().as_str(), "https://demo.supabase.co/rest/v1/tasks");
    }

    #[test]
    fn test_sign_up_response_with_session() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "user": {"id": "00000000-0000-0000-0000-000000000abc", "email": "jane@example.com"}
        }"#;
        let session = serde_json::from_str::<SignUpResponse>(json).unwrap().into_session();
        assert_eq!(session.access_token.as_deref(), Some("jwt"));
        assert_eq!(session.identity.email, "jane@example.com");
    }

    #[test]
    fn test_sign_up_response_pending_confirmation() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000abc",
            "email": "jane@example.com",
            "confirmation_sent_at": "2024-03-01T10:00:00Z"
        }"#;
        let session = serde_json::from_str::<SignUpResponse>(json).unwrap().into_session();
        assert_eq!(session.access_token, None);
        assert_eq!(session.identity.id, Uuid::from_u128(0xabc));
    }

    #[test]
    fn test_sign_up_body_nests_profile_under_data() {
        let profile = Profile::from_fields("Jane", "");
        let body = serde_json::to_value(SignUpBody {
            email: "jane@example.com",
            password: "secret",
            data: &profile,
        })
        .unwrap();
        assert_eq!(body["data"], serde_json::json!({"name": "Jane"}));
    }
}
