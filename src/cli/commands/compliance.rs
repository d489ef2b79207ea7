//! cli::commands::compliance
//!
//! The compliance card: protected branches and license.
//!
//! Unlike the other cards this one combines two fetches; a missing
//! license (404) is rendered as "none", not treated as a failure.

use anyhow::Result;
use std::fmt::Write as _;

use crate::api::models::{Branch, LicenseInfo};
use crate::api::{FetchError, InsightsError};
use crate::insights::EntityInsights;
use crate::resource::{AsyncResource, DependencyKey};
use crate::ui::{output, Verbosity};

/// Branch window for the compliance card.
const MAX_BRANCHES: usize = 50;

pub async fn run(bound: &EntityInsights, verbosity: Verbosity) -> Result<()> {
    let resource: AsyncResource<Vec<Branch>> = AsyncResource::new();
    let key = DependencyKey::from_parts(&[
        &bound.project().owner,
        &bound.project().repo,
        "branches?protected=true",
        &MAX_BRANCHES.to_string(),
    ]);

    resource
        .load(key, bound.protected_branches(MAX_BRANCHES))
        .await;

    let snapshot = resource.snapshot();
    if let Some(error) = snapshot.error {
        return Err(error.into());
    }

    let license = match bound.license().await {
        Ok(info) => Some(info),
        Err(InsightsError::Fetch(FetchError::Api { status: 404, .. })) => None,
        Err(error) => return Err(error.into()),
    };

    let branches = snapshot.value.unwrap_or_default();
    output::print(render(&branches, license.as_ref()), verbosity);
    Ok(())
}

/// Render the card text.
fn render(branches: &[Branch], license: Option<&LicenseInfo>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Compliance");

    if branches.is_empty() {
        let _ = writeln!(out, "  protected branches: none");
    } else {
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        let _ = writeln!(out, "  protected branches: {}", names.join(", "));
    }

    match license {
        Some(info) => {
            let _ = writeln!(out, "  license: {}", info.license.name);
        }
        None => {
            let _ = writeln!(out, "  license: none");
        }
    }
    out
}
