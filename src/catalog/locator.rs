//! catalog::locator
//!
//! Extracts the `{owner, repo}` identity from an entity's project-slug
//! annotation.

use thiserror::Error;

use super::{Entity, ANNOTATION_PROJECT_SLUG};

/// The entity has no usable project-slug annotation.
///
/// This is an "inapplicable" outcome rather than a failure: callers map
/// it to rendering nothing and must not issue any HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entity has no '{ANNOTATION_PROJECT_SLUG}' annotation")]
pub struct NotConfigured;

/// Owner/repository identity extracted from a project slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl ProjectRef {
    /// Parse an `owner/repo` slug.
    ///
    /// Splits on the first `/`; both sides must be non-empty.
    pub fn from_slug(slug: &str) -> Result<Self, NotConfigured> {
        let (owner, repo) = slug.split_once('/').ok_or(NotConfigured)?;
        if owner.is_empty() || repo.is_empty() {
            return Err(NotConfigured);
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// The `owner/repo` slug form.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Resolve the repository identity an entity refers to.
///
/// Pure and side-effect free. Returns [`NotConfigured`] when the
/// annotation is absent or malformed (no `/`, empty owner or repo).
pub fn locate(entity: &Entity) -> Result<ProjectRef, NotConfigured> {
    let slug = entity.annotation(ANNOTATION_PROJECT_SLUG).ok_or(NotConfigured)?;
    ProjectRef::from_slug(slug)
}
