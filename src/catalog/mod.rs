//! catalog - Entity references and repository identity
//!
//! Entities arrive from an external catalog as opaque records carrying
//! key/value annotations. This module owns the two annotation keys the
//! crate understands and the locator that turns the project-slug
//! annotation into a typed `{owner, repo}` identity.
//!
//! # Design
//!
//! Annotations are duck-typed at the source, so everything required is
//! validated here at the boundary. A missing or malformed project slug
//! is not an error: it means the entity has no associated repository and
//! every card renders nothing.

mod entity;
mod locator;

pub use entity::Entity;
pub use locator::{locate, NotConfigured, ProjectRef};

/// Annotation holding the `owner/repo` project slug.
pub const ANNOTATION_PROJECT_SLUG: &str = "github.com/project-slug";

/// Annotation naming a non-default (self-hosted) instance.
pub const ANNOTATION_HOST: &str = "github.com/host";
