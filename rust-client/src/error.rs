//! Error types for API operations.

use thiserror::Error;

use crate::response::ApiResponse;

/// Errors surfaced by webhook-management calls.
///
/// Failure handling is "classify once, surface once": nothing in this crate
/// retries, and every call terminates on its first outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: connection, DNS resolution, timeout, or an
    /// unreadable body. No usable response is available.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status code in `[400, 600)` while the caller
    /// asked for error statuses to be rejected.
    #[error("StatusCodeError: {} - {}", .response.status_code, .response.status_text_or_null())]
    Status {
        /// Full response, kept for caller inspection.
        response: ApiResponse,
    },

    /// Invalid configuration or missing credentials.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The response attached to a `Status` rejection, if any.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Error::Status { response } => Some(response),
            _ => None,
        }
    }
}
