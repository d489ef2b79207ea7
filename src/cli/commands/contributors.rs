//! cli::commands::contributors
//!
//! The contributors card: top contributors with commit counts.

use anyhow::Result;
use std::fmt::Write as _;

use crate::api::models::Contributor;
use crate::insights::EntityInsights;
use crate::resource::{AsyncResource, DependencyKey};
use crate::ui::{output, Verbosity};

pub async fn run(
    bound: &EntityInsights,
    per_page: u32,
    limit: usize,
    verbosity: Verbosity,
) -> Result<()> {
    let resource: AsyncResource<Vec<Contributor>> = AsyncResource::new();
    let key = DependencyKey::from_parts(&[
        &bound.project().owner,
        &bound.project().repo,
        "contributors",
        &per_page.to_string(),
        &limit.to_string(),
    ]);

    resource
        .load(key, bound.contributors(per_page, limit))
        .await;

    let snapshot = resource.snapshot();
    if let Some(error) = snapshot.error {
        return Err(error.into());
    }

    let contributors = snapshot.value.unwrap_or_default();
    if let Some(card) = render(&contributors, &bound.web_url("graphs/contributors")) {
        output::print(card, verbosity);
    }
    Ok(())
}

/// Render the card text; `None` when there is nothing to show.
fn render(contributors: &[Contributor], link: &str) -> Option<String> {
    if contributors.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "Contributors ({})", link);
    for contributor in contributors {
        let _ = writeln!(
            out,
            "  {:<24} {} commits",
            contributor.login, contributor.contributions
        );
    }
    Some(out)
}
