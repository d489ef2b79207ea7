//! auth::static_token
//!
//! Fixed-token provider for the CLI and tests.

use async_trait::async_trait;

use super::{AuthError, TokenProvider};

/// A provider that hands out one pre-issued token.
///
/// The token is assumed to already carry the scopes callers request;
/// no refresh or expiry handling is performed.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Create a provider with an explicit token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Create a provider from an environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] if the variable is unset
    /// or empty.
    pub fn from_env(var: &str) -> Result<Self, AuthError> {
        match std::env::var(var) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(AuthError::NotAuthenticated(format!("set {}", var))),
        }
    }
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self, _scopes: &[&str]) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}
