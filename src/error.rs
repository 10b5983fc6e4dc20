//! Failure taxonomy for the fetch gateway.
//!
//! Only gateway failures are errors. Malformed payloads are absorbed by the
//! normalizer and never surface here.

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Mock table has no entry for the requested path.
    #[error("no data for {path}")]
    NotFound { path: String },

    /// Live backend answered outside the 2xx range.
    #[error("backend returned HTTP {status}")]
    Http { status: u16 },

    /// Transport or body decoding failure.
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        // ---
        match e.status() {
            Some(status) => GatewayError::Http {
                status: status.as_u16(),
            },
            None => GatewayError::Network(e.to_string()),
        }
    }
}
