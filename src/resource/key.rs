//! resource::key
//!
//! Dependency fingerprints for async resources.

use sha2::{Digest, Sha256};

use crate::api::PageRequest;
use crate::catalog::ProjectRef;

/// Fingerprint of an async operation's inputs.
///
/// Two keys are equal exactly when the operation would retrieve the
/// same data: same repository identity, resource path, and page window.
/// A changed key is what restarts a resource's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyKey(String);

impl DependencyKey {
    /// Fingerprint a paginated retrieval.
    pub fn for_request(project: &ProjectRef, request: &PageRequest) -> Self {
        Self::from_parts(&[
            &project.owner,
            &project.repo,
            &request.resource_path,
            &request.per_page.to_string(),
            &request.max_items.to_string(),
        ])
    }

    /// Fingerprint arbitrary input parts.
    ///
    /// Parts are length-prefixed before hashing so no two distinct part
    /// lists collide by concatenation.
    pub fn from_parts(parts: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.len().to_le_bytes());
            hasher.update(part.as_bytes());
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// The hex digest form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
