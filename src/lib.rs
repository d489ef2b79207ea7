//! repolens - Repository insight cards for catalog entities
//!
//! Renders informational cards (releases, contributors, languages,
//! README, compliance) for the repository a catalog entity refers to.
//! The substance is the shared data-access layer; presentation is a
//! thin terminal surface over resolved values.
//!
//! # Architecture
//!
//! - [`catalog`] - Entity references and project-slug location
//! - [`host`] - API/web host resolution (public vs. self-hosted)
//! - [`auth`] - Credential acquisition seam ([`auth::TokenProvider`])
//! - [`api`] - Paginated HTTP retrieval and typed resource models
//! - [`resource`] - Pending/resolved/rejected async values keyed by a
//!   dependency fingerprint, with stale-result suppression
//! - [`insights`] - Entity-facing composition of the above
//! - [`config`] - Instance-override configuration
//! - [`cli`] / [`ui`] - Terminal card rendering
//!
//! # Invariants
//!
//! 1. An entity without a project-slug annotation renders nothing and
//!    causes no HTTP traffic
//! 2. Credentials are re-requested from the provider on every fetch and
//!    never cached or logged by this crate
//! 3. Pages are retrieved and concatenated in strictly increasing page
//!    order; a failed page discards the whole fetch
//! 4. A resource settles at most once per dependency key; stale
//!    completions never overwrite a newer key's state

pub mod api;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod host;
pub mod insights;
pub mod resource;
pub mod ui;
