//! Error Types
//!
//! Failures surfaced by the backend collaborator and by configuration loading.

use serde::Deserialize;
use thiserror::Error;

/// Common result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Anything that can go wrong talking to the auth service or the todo store.
///
/// Transient and permanent failures are not distinguished; the UI reports
/// them all the same way.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; `message` is the service's own text
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Build an [`BackendError::Api`] from a failed response body.
    ///
    /// The auth service answers with `msg` or `error_description`, the REST
    /// layer with `message`. Unknown shapes fall back to the raw body, then
    /// to the status reason.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| match reason {
                Some(reason) => format!("{} {}", status, reason),
                None => format!("request failed with status {}", status),
            });
        BackendError::Api { status, message }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Build-time settings that are missing or malformed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing build-time setting {0}")]
    Missing(&'static str),

    #[error("invalid backend URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: BackendError) -> String {
        match err {
            BackendError::Api { message, .. } => message,
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_auth_error_body() {
        let body = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
        assert_eq!(message(BackendError::from_response(400, None, body)), "Invalid login credentials");

        let legacy = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(message(BackendError::from_response(400, None, legacy)), "Invalid login credentials");
    }

    #[test]
    fn test_rest_error_body() {
        let body = r#"{"code":"23502","details":null,"hint":null,"message":"null value in column \"task\""}"#;
        let err = BackendError::from_response(400, Some("Bad Request"), body);
        assert_eq!(err.to_string(), r#"null value in column "task""#);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(message(BackendError::from_response(502, Some("Bad Gateway"), "upstream down")), "upstream down");
        assert_eq!(message(BackendError::from_response(502, Some("Bad Gateway"), "")), "502 Bad Gateway");
        assert_eq!(message(BackendError::from_response(599, None, "  ")), "request failed with status 599");
    }
}
