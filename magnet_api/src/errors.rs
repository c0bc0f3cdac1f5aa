//! Error types for the API client and the status-code error mapper.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the base URL and path.
    #[error("network error: invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request body could not be encoded as JSON.
    #[error("request encode error: {0}")]
    Encode(#[source] serde_json::Error),
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with a status outside `200..300`.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A success body did not match the expected shape.
    #[error("Response parse error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error. Transport and decode errors have none.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// True when the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::Encode(_) | Self::Network(_))
    }
}

/// Category of a non-success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthorized,
    Forbidden,
    BadRequest,
    NotFound,
    ServerError,
    Other,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            400 => Self::BadRequest,
            404 => Self::NotFound,
            500 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// A status-coded failure returned by the API.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: u16,
    pub kind: ApiErrorKind,
    /// Message extracted from the response body.
    pub message: String,
    /// Request path that produced the error.
    pub path: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = &self.message;
        match self.kind {
            ApiErrorKind::Unauthorized => write!(
                f,
                "Unauthorized: {} Check your API key. Set MAGNET_API_KEY.",
                msg
            ),
            ApiErrorKind::Forbidden => write!(f, "Forbidden: {}", msg),
            ApiErrorKind::BadRequest => write!(f, "Bad request: {}", msg),
            ApiErrorKind::NotFound => write!(f, "Not found: {}", msg),
            ApiErrorKind::ServerError => write!(f, "Server error: {}", msg),
            ApiErrorKind::Other => write!(f, "Error {}: {}", self.status, msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error payload sent by the API. Any subset of the fields may be present.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
    pub message: Option<String>,
    pub issues: Option<Vec<String>>,
}

impl ErrorBody {
    /// Best-effort parse. A malformed or non-JSON body yields no fields.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// First non-empty of `error`, `details`, `message`, then the joined `issues`.
    pub fn message(&self) -> Option<String> {
        [&self.error, &self.details, &self.message]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .cloned()
            .or_else(|| {
                self.issues
                    .as_deref()
                    .map(|issues| issues.join("; "))
                    .filter(|joined| !joined.is_empty())
            })
    }
}

/// Maps a non-success response onto an [`Error::Api`].
pub fn map_error(status: u16, body: &[u8], path: &str) -> Error {
    let message = ErrorBody::parse(body)
        .message()
        .or_else(|| {
            let raw = String::from_utf8_lossy(body).trim().to_string();
            (!raw.is_empty()).then_some(raw)
        })
        .unwrap_or_else(|| status_text(status).to_string());

    Error::Api(ApiError {
        status,
        kind: ApiErrorKind::from_status(status),
        message,
        path: path.to_string(),
    })
}

fn status_text(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_for(status: u16, body: &str) -> String {
        map_error(status, body.as_bytes(), "/api/issues").to_string()
    }

    #[test]
    fn categories_carry_keyword_and_message() {
        let cases = [
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (400, "Bad request"),
            (404, "Not found"),
            (500, "Server error"),
        ];
        for (status, keyword) in cases {
            let msg = message_for(status, r#"{"error":"boom"}"#);
            assert!(msg.contains(keyword), "{status}: {msg}");
            assert!(msg.contains("boom"), "{status}: {msg}");
        }
    }

    #[test]
    fn unauthorized_hints_at_env_var() {
        let msg = message_for(401, r#"{"error":"invalid key"}"#);
        assert_eq!(
            msg,
            "Unauthorized: invalid key Check your API key. Set MAGNET_API_KEY."
        );
    }

    #[test]
    fn unmapped_status_includes_code() {
        let msg = message_for(418, r#"{"message":"short and stout"}"#);
        assert_eq!(msg, "Error 418: short and stout");

        let err = map_error(502, b"", "/x");
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn details_used_when_error_absent() {
        let err = map_error(400, br#"{"details":"limit too large"}"#, "/x");
        match err {
            Error::Api(api) => {
                assert_eq!(api.message, "limit too large");
                assert_eq!(api.kind, ApiErrorKind::BadRequest);
                assert_eq!(api.path, "/x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_field_wins_over_details() {
        let msg = message_for(400, r#"{"error":"first","details":"second"}"#);
        assert_eq!(msg, "Bad request: first");
    }

    #[test]
    fn empty_fields_fall_through() {
        let msg = message_for(403, r#"{"error":"","details":"","message":"nope"}"#);
        assert_eq!(msg, "Forbidden: nope");
    }

    #[test]
    fn issues_are_joined() {
        let msg = message_for(400, r#"{"issues":["title required","bad branch"]}"#);
        assert_eq!(msg, "Bad request: title required; bad branch");
    }

    #[test]
    fn null_fields_are_skipped() {
        let msg = message_for(400, r#"{"error":null,"issues":null,"details":"bad cursor"}"#);
        assert_eq!(msg, "Bad request: bad cursor");
    }

    #[test]
    fn raw_body_used_when_not_json() {
        let msg = message_for(500, "  upstream exploded \n");
        assert_eq!(msg, "Server error: upstream exploded");
    }

    #[test]
    fn json_without_known_fields_uses_raw_body() {
        let msg = message_for(404, r#"{"code":7}"#);
        assert_eq!(msg, r#"Not found: {"code":7}"#);
    }

    #[test]
    fn empty_body_falls_back_to_status_text() {
        assert_eq!(message_for(404, ""), "Not found: Not Found");
        assert_eq!(message_for(503, "   "), "Error 503: Service Unavailable");
        assert_eq!(message_for(599, ""), "Error 599: Unknown Status");
    }

    #[test]
    fn api_error_is_not_transport() {
        let err = map_error(500, b"", "/x");
        assert!(!err.is_transport());
    }
}
