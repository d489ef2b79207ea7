//! api - Paginated HTTP retrieval
//!
//! The one place the crate performs I/O. [`ApiClient`] resolves to a
//! single API host, attaches bearer credentials from the auth seam, and
//! follows pagination up to a client-side item ceiling. Failures
//! surface through the [`error`] taxonomy; the typed [`models`] are the
//! card-facing view of the common resources.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, PageRequest, MAX_PAGE_SIZE};
pub use error::{FetchError, InsightsError};
