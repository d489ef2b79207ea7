//! ui - User-facing output utilities

pub mod output;

pub use output::Verbosity;
