//! cli - Command-line interface layer
//!
//! Parses arguments and delegates to one card command per subcommand.
//! Rendering is split into pure functions over resolved snapshots so
//! the presentation never performs I/O.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
