//! auth - Credential acquisition seam
//!
//! The core never mints, stores, or refreshes credentials itself. It
//! asks a [`TokenProvider`] for a short-lived bearer token on every
//! fetch invocation; token lifetime and caching policy belong entirely
//! to the provider behind the trait.
//!
//! # Security
//!
//! Token values must never appear in logs, errors, or debug output.
//! Error variants carry context strings, never the token itself.

mod static_token;

pub use static_token::StaticTokenProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Scopes required to read repository metadata for the insight cards.
pub const READ_SCOPES: &[&str] = &["repo"];

/// Errors from credential acquisition.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No credential source is configured.
    #[error("not authenticated: {0}")]
    NotAuthenticated(String),

    /// The provider refused to issue a token for the requested scopes.
    #[error("authentication denied: {0}")]
    Denied(String),

    /// The provider failed for an internal or transport reason.
    #[error("credential provider error: {0}")]
    Provider(String),
}

/// Capability interface for acquiring bearer credentials.
///
/// Implementations must be `Send + Sync` so a provider can be shared
/// across concurrently loading cards. Latency may be unbounded; callers
/// surface a pending state while awaiting. A rejection is propagated as
/// an error state, never retried automatically at this layer.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a bearer token valid for the given scopes.
    ///
    /// Called on every fetch; the provider decides whether to serve a
    /// cached token or mint a fresh one.
    async fn bearer_token(&self, scopes: &[&str]) -> Result<String, AuthError>;
}
