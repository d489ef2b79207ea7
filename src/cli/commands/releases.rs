//! cli::commands::releases
//!
//! The releases card: recent releases with tag and pre-release marker.

use anyhow::Result;
use std::fmt::Write as _;

use crate::api::models::Release;
use crate::insights::EntityInsights;
use crate::resource::{AsyncResource, DependencyKey};
use crate::ui::{output, Verbosity};

pub async fn run(
    bound: &EntityInsights,
    per_page: u32,
    limit: usize,
    verbosity: Verbosity,
) -> Result<()> {
    let resource: AsyncResource<Vec<Release>> = AsyncResource::new();
    let key = DependencyKey::from_parts(&[
        &bound.project().owner,
        &bound.project().repo,
        "releases",
        &per_page.to_string(),
        &limit.to_string(),
    ]);

    resource.load(key, bound.releases(per_page, limit)).await;

    let snapshot = resource.snapshot();
    if let Some(error) = snapshot.error {
        return Err(error.into());
    }

    let releases = snapshot.value.unwrap_or_default();
    if let Some(card) = render(&releases, &bound.web_url("releases")) {
        output::print(card, verbosity);
    }
    Ok(())
}

/// Render the card text; `None` when there is nothing to show.
fn render(releases: &[Release], link: &str) -> Option<String> {
    if releases.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "Releases ({})", link);
    for release in releases {
        let marker = if release.prerelease {
            "  [pre-release]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {}  ({}){}",
            release.display_name(),
            release.tag_name,
            marker
        );
    }
    Some(out)
}
