//! cli::commands::readme
//!
//! The README card: decoded README content.

use anyhow::Result;

use crate::api::models::Readme;
use crate::insights::EntityInsights;
use crate::resource::{AsyncResource, DependencyKey};
use crate::ui::{output, Verbosity};

pub async fn run(bound: &EntityInsights, verbosity: Verbosity) -> Result<()> {
    let resource: AsyncResource<Readme> = AsyncResource::new();
    let key =
        DependencyKey::from_parts(&[&bound.project().owner, &bound.project().repo, "readme"]);

    resource.load(key, bound.readme()).await;

    let snapshot = resource.snapshot();
    if let Some(error) = snapshot.error {
        return Err(error.into());
    }

    if let Some(card) = snapshot.value.as_ref().and_then(render) {
        output::print(card, verbosity);
    }
    Ok(())
}

/// Render the card text; `None` when the content cannot be decoded.
fn render(readme: &Readme) -> Option<String> {
    let content = readme.decoded_content()?;
    Some(format!("{}\n\n{}", readme.path, content))
}
