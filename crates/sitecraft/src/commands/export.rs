//! Site export command: build the downloadable zip archive.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sitecraft_model::TemplateCatalog;
use sitecraft_static::{package_archive, site_name, Assembler, Asset, AssetKind, ComposeOptions};

use crate::config::ConfigFile;

/// Run the export command.
pub async fn run(
    config: &ConfigFile,
    site_path: PathBuf,
    output: Option<PathBuf>,
    minify: bool,
) -> Result<()> {
    let site = super::load_site(&site_path)?;

    tracing::info!("Exporting site {:?}...", site.title);

    let assembler = Assembler::new(ComposeOptions {
        minify: minify || config.build.minify,
    });
    let html = assembler.assemble_site(&site)?;

    let content = super::content_of(&site);
    let template_name = TemplateCatalog::builtin()
        .get(&site.template)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| site.title.clone());
    let name = site_name(&content, &template_name);

    let assets = collect_uploads(Path::new(&config.output.uploads_dir), &site.user);
    let report = package_archive(&name, &html, &assets)?;

    for skipped in &report.skipped {
        tracing::warn!("Left out of archive: {}", skipped);
    }

    let out = output.unwrap_or_else(|| PathBuf::from(format!("{name}.zip")));
    fs::write(&out, &report.bytes)
        .with_context(|| format!("Failed to write archive {}", out.display()))?;

    tracing::info!("Wrote {} ({} bytes)", out.display(), report.bytes.len());

    Ok(())
}

/// Gather the owner's uploads as archive assets, sorted by extension into
/// the image, script, and style folders. Unreadable files are skipped.
fn collect_uploads(uploads_dir: &Path, user: &str) -> Vec<Asset> {
    let dir = uploads_dir.join(user);
    let Ok(entries) = fs::read_dir(&dir) else {
        return Vec::new();
    };

    let mut assets = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match fs::read(&path) {
            Ok(bytes) => assets.push(Asset {
                kind: kind_for(&path),
                name: name.to_string(),
                bytes,
            }),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Skipping unreadable upload");
            }
        }
    }

    assets.sort_by(|a, b| a.name.cmp(&b.name));
    assets
}

fn kind_for(path: &Path) -> AssetKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => AssetKind::Style,
        Some("js" | "mjs") => AssetKind::Script,
        _ => AssetKind::Image,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uploads_sorted_and_classified_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("user-1");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("theme.css"), "body{}").unwrap();
        fs::write(dir.join("app.js"), ";").unwrap();
        fs::write(dir.join("photo.png"), [1u8]).unwrap();

        let assets = collect_uploads(tmp.path(), "user-1");

        let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["app.js", "photo.png", "theme.css"]);
        assert_eq!(assets[0].kind, AssetKind::Script);
        assert_eq!(assets[1].kind, AssetKind::Image);
        assert_eq!(assets[2].kind, AssetKind::Style);
    }

    #[test]
    fn missing_upload_folder_yields_no_assets() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(collect_uploads(tmp.path(), "nobody").is_empty());
    }
}
