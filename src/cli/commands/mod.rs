//! cli::commands
//!
//! Command dispatch and the shared setup every card command needs.

mod compliance;
mod contributors;
mod languages;
mod readme;
mod releases;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::auth::StaticTokenProvider;
use crate::catalog::{Entity, ANNOTATION_HOST, ANNOTATION_PROJECT_SLUG};
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::insights::Insights;
use crate::ui::Verbosity;

/// Run the parsed command.
///
/// An entity whose repo slug is absent or malformed renders nothing and
/// exits cleanly; that is the "not configured" outcome, not an error.
pub async fn run(cli: Cli) -> Result<()> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let provider = StaticTokenProvider::from_env(&cli.token_env)
        .with_context(|| format!("no bearer token in ${}", cli.token_env))?;

    let entity = entity_from_args(&cli);
    let insights = Insights::new(Arc::new(provider), config.global.instances);

    let bound = match insights.for_entity(&entity) {
        Ok(bound) => bound,
        Err(_) => {
            tracing::debug!("entity has no repository; rendering nothing");
            return Ok(());
        }
    };

    match cli.command {
        Command::Releases { limit, per_page } => {
            releases::run(&bound, per_page.unwrap_or(limit as u32), limit, verbosity).await
        }
        Command::Contributors { limit, per_page } => {
            contributors::run(&bound, per_page.unwrap_or(limit as u32), limit, verbosity).await
        }
        Command::Languages => languages::run(&bound, verbosity).await,
        Command::Readme => readme::run(&bound, verbosity).await,
        Command::Compliance => compliance::run(&bound, verbosity).await,
    }
}

/// Build the entity the flags describe.
fn entity_from_args(cli: &Cli) -> Entity {
    let mut entity = Entity::new(cli.repo.clone().unwrap_or_default());
    if let Some(repo) = &cli.repo {
        entity = entity.with_annotation(ANNOTATION_PROJECT_SLUG, repo.clone());
    }
    if let Some(host) = &cli.host {
        entity = entity.with_annotation(ANNOTATION_HOST, host.clone());
    }
    entity
}
