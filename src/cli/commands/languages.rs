//! cli::commands::languages
//!
//! The languages card: byte share per language.

use anyhow::Result;
use std::fmt::Write as _;

use crate::api::models::Languages;
use crate::insights::EntityInsights;
use crate::resource::{AsyncResource, DependencyKey};
use crate::ui::{output, Verbosity};

pub async fn run(bound: &EntityInsights, verbosity: Verbosity) -> Result<()> {
    let resource: AsyncResource<Languages> = AsyncResource::new();
    let key = DependencyKey::from_parts(&[
        &bound.project().owner,
        &bound.project().repo,
        "languages",
    ]);

    resource.load(key, bound.languages()).await;

    let snapshot = resource.snapshot();
    if let Some(error) = snapshot.error {
        return Err(error.into());
    }

    let languages = snapshot.value.unwrap_or_default();
    if let Some(card) = render(&languages) {
        output::print(card, verbosity);
    }
    Ok(())
}

/// Render the card text; `None` when there is nothing to show.
fn render(languages: &Languages) -> Option<String> {
    if languages.is_empty() {
        return None;
    }

    let total: u64 = languages.values().sum();
    // Largest share first
    let mut entries: Vec<(&String, &u64)> = languages.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = String::new();
    let _ = writeln!(out, "Languages");
    for (language, bytes) in entries {
        let share = if total > 0 {
            (*bytes as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "  {:<16} {:>5.1}%", language, share);
    }
    Some(out)
}
