//! Site generation command: write the public artifact.

use std::path::PathBuf;

use anyhow::Result;
use sitecraft_static::{PublishConfig, SitePublisher};

use crate::config::ConfigFile;

/// Run the generate command.
pub async fn run(
    config: &ConfigFile,
    site_path: PathBuf,
    sites_dir: Option<PathBuf>,
    uploads_dir: Option<PathBuf>,
) -> Result<()> {
    let site = super::load_site(&site_path)?;

    tracing::info!("Generating site {:?}...", site.title);

    let publisher = SitePublisher::new(PublishConfig {
        sites_dir: sites_dir.unwrap_or_else(|| PathBuf::from(&config.output.sites_dir)),
        uploads_dir: uploads_dir.unwrap_or_else(|| PathBuf::from(&config.output.uploads_dir)),
    });

    let generated = publisher.generate(&site).await?;

    tracing::info!("Output: {}", generated.dir.display());
    tracing::info!("Public path: {}", generated.public_path);

    Ok(())
}
