//! catalog::entity
//!
//! The entity record consumed by the data-access layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opaque catalog record describing a tracked component.
///
/// Only the annotation map is interpreted here; the catalog's own
/// storage model is out of scope and entities are treated as a
/// read-only input.
///
/// # Example
///
/// ```
/// use repolens::catalog::{Entity, ANNOTATION_PROJECT_SLUG};
///
/// let entity = Entity::new("widgets")
///     .with_annotation(ANNOTATION_PROJECT_SLUG, "acme/widgets");
/// assert_eq!(
///     entity.annotation(ANNOTATION_PROJECT_SLUG),
///     Some("acme/widgets")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name within the catalog.
    pub name: String,

    /// Key/value annotations attached by the catalog.
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl Entity {
    /// Create an entity with no annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: BTreeMap::new(),
        }
    }

    /// Attach an annotation, replacing any existing value for the key.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Look up an annotation value.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}
