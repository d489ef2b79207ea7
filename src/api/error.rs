//! api::error
//!
//! Error taxonomy for the data-access layer.

use thiserror::Error;

use crate::auth::AuthError;

/// Errors from HTTP retrieval.
///
/// A non-2xx response carries the status; a transport failure (no
/// response at all) has none.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error; no response was received.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// The HTTP status, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            FetchError::Network(_) => None,
        }
    }
}

/// Any failure a card can observe through the resource state.
///
/// This is the payload of the rejected resource state. The deliberate
/// "entity not configured" outcome is not represented here; it never
/// reaches a card as an error.
#[derive(Debug, Clone, Error)]
pub enum InsightsError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
