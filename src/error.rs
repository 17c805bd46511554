//! Error handling for the DojoAdmin client

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for the DojoAdmin client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The backend rejected the token (401); the stored session must be discarded
    #[error("unauthorized: session is no longer valid")]
    Unauthorized,

    /// The authenticated user may not perform this operation (403)
    #[error("forbidden: insufficient permissions")]
    Forbidden,

    /// The requested resource does not exist (404)
    #[error("not found")]
    NotFound,

    /// The backend failed (5xx)
    #[error("server error (status {status})")]
    Server { status: u16 },

    /// Any other non-success response
    #[error("request rejected (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Classify a non-2xx response into the error taxonomy.
    ///
    /// 401 → [`Error::Unauthorized`], 403 → [`Error::Forbidden`],
    /// 404 → [`Error::NotFound`], 5xx → [`Error::Server`], anything else
    /// carries the status and response body verbatim.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized,
            StatusCode::FORBIDDEN => Error::Forbidden,
            StatusCode::NOT_FOUND => Error::NotFound,
            s if s.is_server_error() => Error::Server { status: s.as_u16() },
            s => Error::Api {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// True when the error means the stored session must be torn down.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
