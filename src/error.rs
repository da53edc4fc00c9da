//! Error taxonomy for Fluidcoins API calls and the status-code classifier.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error payload the Fluidcoins API returns alongside a failing status code.
///
/// `status` is the API's own success flag (usually `false` here), not the HTTP code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: bool,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors returned by every endpoint method.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP 400
    #[error("Bad request: {0}")]
    BadRequest(ApiError),

    /// HTTP 401
    #[error("Unauthorized: {0}")]
    Unauthorized(ApiError),

    /// HTTP 404
    #[error("Not found: {0}")]
    NotFound(ApiError),

    /// Any other non-success status code.
    #[error("Server error (HTTP {code}): {error}")]
    Server { code: u16, error: ApiError },

    /// The request never produced an HTTP response (DNS, connect, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not JSON.
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload that cannot be represented as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// An identifier that would not address a single resource (empty, `.` or `..`).
    #[error("Invalid reference: {0:?}")]
    InvalidReference(String),

    /// The client could not be configured.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Fieldless discriminant of [`Error`], for exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Server,
    Transport,
    Decode,
    Encode,
    InvalidReference,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadRequest(_) => ErrorKind::BadRequest,
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Server { .. } => ErrorKind::Server,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Encode(_) => ErrorKind::Encode,
            Error::InvalidReference(_) => ErrorKind::InvalidReference,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// The upstream error payload, when the API answered with one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::BadRequest(e) | Error::Unauthorized(e) | Error::NotFound(e) => Some(e),
            Error::Server { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The upstream `message` field.
    pub fn message(&self) -> Option<&str> {
        self.api_error().map(|e| e.message.as_str())
    }

    /// The upstream `status` flag.
    pub fn status(&self) -> Option<bool> {
        self.api_error().map(|e| e.status)
    }
}

/// Maps a failed response onto the error taxonomy.
///
/// Always yields an error. Bodies that are not the usual `{message, status}`
/// object keep their raw text as the message, with `status` set to `false`.
pub fn classify(code: StatusCode, body: &str) -> Error {
    let error = parse_api_error(code, body);

    match code {
        StatusCode::BAD_REQUEST => Error::BadRequest(error),
        StatusCode::UNAUTHORIZED => Error::Unauthorized(error),
        StatusCode::NOT_FOUND => Error::NotFound(error),
        _ => Error::Server {
            code: code.as_u16(),
            error,
        },
    }
}

fn parse_api_error(code: StatusCode, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str);

    if let (Some(parsed), Some(message)) = (&parsed, message) {
        return ApiError {
            message: message.to_string(),
            status: parsed
                .get("status")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };
    }

    let message = if body.trim().is_empty() {
        code.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        body.trim().to_string()
    };

    ApiError {
        message,
        status: false,
    }
}
