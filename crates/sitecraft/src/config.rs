//! Configuration file structure (sitecraft.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Root directory generated sites are written under.
    #[serde(default = "default_sites_dir")]
    pub sites_dir: String,
    /// Root directory of per-user upload folders.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sites_dir: default_sites_dir(),
            uploads_dir: default_uploads_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSettings {
    /// Minify composed stylesheets. Off by default so repeated builds of
    /// unchanged content stay byte-identical.
    #[serde(default)]
    pub minify: bool,
}

fn default_sites_dir() -> String {
    "generated-sites".to_string()
}
fn default_uploads_dir() -> String {
    "uploads".to_string()
}

/// Load configuration from sitecraft.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("does-not-exist.toml")).unwrap();

        assert_eq!(config.output.sites_dir, "generated-sites");
        assert_eq!(config.output.uploads_dir, "uploads");
        assert!(!config.build.minify);
    }

    #[test]
    fn partial_file_keeps_unset_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitecraft.toml");
        fs::write(&path, "[build]\nminify = true\n").unwrap();

        let config = load(&path).unwrap();

        assert!(config.build.minify);
        assert_eq!(config.output.sites_dir, "generated-sites");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitecraft.toml");
        fs::write(&path, "[output\nsites_dir=").unwrap();

        assert!(load(&path).is_err());
    }
}
