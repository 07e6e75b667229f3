//! Download packaging: a site plus its assets as a zip archive.

use std::io::{Cursor, Write};

use sitecraft_model::{slugify, ContentMap, SectionContent, SectionKind};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Failure while writing the archive.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Archive write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// An asset to bundle alongside the page.
#[derive(Debug, Clone)]
pub struct Asset {
    pub kind: AssetKind,
    /// File name inside the archive folder. Must be a bare name; anything
    /// resembling a path is skipped.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Which archive folder an asset lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Script,
    Style,
}

impl AssetKind {
    fn folder(self) -> &'static str {
        match self {
            AssetKind::Image => "images",
            AssetKind::Script => "scripts",
            AssetKind::Style => "styles",
        }
    }
}

/// Outcome of a packaging run.
#[derive(Debug)]
pub struct PackageReport {
    /// The finished zip archive.
    pub bytes: Vec<u8>,
    /// Asset names that were rejected and left out of the archive.
    pub skipped: Vec<String>,
}

/// Build the download archive: `index.html` and `README.md` at the root,
/// assets under `images/`, `scripts/`, and `styles/`.
///
/// Assets with unsafe names are skipped, not fatal; the report lists them.
pub fn package_archive(
    name: &str,
    html: &str,
    assets: &[Asset],
) -> Result<PackageReport, PackageError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file("index.html", options)?;
    writer.write_all(html.as_bytes())?;

    writer.start_file("README.md", options)?;
    writer.write_all(readme(name).as_bytes())?;

    let mut skipped = Vec::new();
    for asset in assets {
        if !safe_name(&asset.name) {
            tracing::warn!(name = %asset.name, "Skipping asset with unsafe name");
            skipped.push(asset.name.clone());
            continue;
        }
        writer.start_file(format!("{}/{}", asset.kind.folder(), asset.name), options)?;
        writer.write_all(&asset.bytes)?;
    }

    let bytes = writer.finish()?.into_inner();
    Ok(PackageReport { bytes, skipped })
}

/// Derive the archive's site name: header title, then header logo text,
/// then the template name, slugified; `my-website` when all are blank.
pub fn site_name(content: &ContentMap, template_name: &str) -> String {
    let header = match content.get(SectionKind::Header) {
        Some(SectionContent::Header(h)) => Some(h),
        _ => None,
    };

    let candidate = header
        .and_then(|h| h.title.as_deref())
        .filter(|t| !t.trim().is_empty())
        .or_else(|| header.and_then(|h| h.logo.as_deref()).filter(|l| !l.trim().is_empty()))
        .unwrap_or(template_name);

    let slug = slugify(candidate);
    if slug.is_empty() {
        "my-website".to_string()
    } else {
        slug
    }
}

fn readme(name: &str) -> String {
    format!(
        "# {name}\n\n\
         This folder contains your exported website.\n\n\
         - `index.html` is the complete page; open it in any browser.\n\
         - `images/`, `scripts/`, and `styles/` hold bundled assets, when present.\n\n\
         To put the site online, upload the folder contents to any static host.\n"
    )
}

/// A bare file name: no separators, no traversal, not hidden, not empty.
fn safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use pretty_assertions::assert_eq;
    use zip::ZipArchive;

    use super::*;

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn archive_without_assets_holds_page_and_readme_only() {
        let report = package_archive("my-site", "<html></html>", &[]).unwrap();

        let mut names = entry_names(&report.bytes);
        names.sort();
        assert_eq!(names, vec!["README.md".to_string(), "index.html".to_string()]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn assets_land_in_kind_folders() {
        let assets = vec![
            Asset {
                kind: AssetKind::Image,
                name: "logo.png".to_string(),
                bytes: vec![1, 2, 3],
            },
            Asset {
                kind: AssetKind::Style,
                name: "extra.css".to_string(),
                bytes: b"body{}".to_vec(),
            },
        ];

        let report = package_archive("my-site", "<html></html>", &assets).unwrap();
        let names = entry_names(&report.bytes);

        assert!(names.contains(&"images/logo.png".to_string()));
        assert!(names.contains(&"styles/extra.css".to_string()));
    }

    #[test]
    fn traversal_names_are_skipped_and_reported() {
        let assets = vec![Asset {
            kind: AssetKind::Script,
            name: "../evil.js".to_string(),
            bytes: Vec::new(),
        }];

        let report = package_archive("my-site", "<html></html>", &assets).unwrap();

        assert_eq!(report.skipped, vec!["../evil.js".to_string()]);
        assert!(!entry_names(&report.bytes).iter().any(|n| n.contains("evil")));
    }

    #[test]
    fn page_round_trips_intact() {
        let report = package_archive("my-site", "<html>page</html>", &[]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(report.bytes)).unwrap();
        let mut page = String::new();
        archive
            .by_name("index.html")
            .unwrap()
            .read_to_string(&mut page)
            .unwrap();

        assert_eq!(page, "<html>page</html>");
    }

    #[test]
    fn site_name_prefers_header_title() {
        let content: ContentMap =
            serde_json::from_value(serde_json::json!({ "header": { "title": "Jane's Portfolio" } }))
                .unwrap();

        assert_eq!(site_name(&content, "Portfolio"), "jane-s-portfolio");
    }

    #[test]
    fn site_name_falls_back_through_logo_and_template() {
        let with_logo: ContentMap =
            serde_json::from_value(serde_json::json!({ "header": { "logo": "JD Studio" } })).unwrap();
        assert_eq!(site_name(&with_logo, "Portfolio"), "jd-studio");

        assert_eq!(site_name(&ContentMap::new(), "Landing Page"), "landing-page");
        assert_eq!(site_name(&ContentMap::new(), "   "), "my-website");
    }
}
