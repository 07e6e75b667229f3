//! Content validation command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use sitecraft_model::{validate_content, TemplateCatalog};

/// Run the validate command.
pub async fn run(site_path: PathBuf) -> Result<()> {
    let site = super::load_site(&site_path)?;

    let catalog = TemplateCatalog::builtin();
    let Some(template) = catalog.get(&site.template) else {
        bail!("Site references unknown template {:?}", site.template);
    };

    let content = super::content_of(&site);
    let report = validate_content(&content, template);

    if report.ok() {
        tracing::info!("Site {:?} is valid for template {:?}", site.title, template.id);
        return Ok(());
    }

    for failure in &report.failures {
        tracing::warn!("{}: {}", failure.section, failure.message);
    }

    bail!("Validation failed with {} issue(s)", report.failures.len());
}
