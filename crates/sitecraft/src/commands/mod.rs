//! CLI command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sitecraft_model::{ContentMap, SectionContent, Site};

pub mod export;
pub mod generate;
pub mod templates;
pub mod themes;
pub mod validate;

/// Load a site record from a JSON file.
pub(crate) fn load_site(path: &Path) -> Result<Site> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site file {}", path.display()))?;
    let site: Site = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse site file {}", path.display()))?;
    Ok(site)
}

/// Collapse a site's visible components into a content map.
///
/// Components with unknown kinds are left out; later components of the same
/// kind win, matching how the assembled page reads the site.
pub(crate) fn content_of(site: &Site) -> ContentMap {
    let mut content = ContentMap::new();
    for component in site.visible_components() {
        if let Some(kind) = component.section_kind() {
            content.insert(SectionContent::from_value(kind, &component.content));
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sitecraft_model::{PlacedComponent, SectionKind};

    use super::*;

    #[test]
    fn content_map_skips_hidden_and_unknown_components() {
        let site = Site {
            components: vec![
                PlacedComponent {
                    id: "a".to_string(),
                    kind: "hero".to_string(),
                    content: json!({ "title": "Visible" }),
                    ..Default::default()
                },
                PlacedComponent {
                    id: "b".to_string(),
                    kind: "carousel".to_string(),
                    ..Default::default()
                },
                PlacedComponent {
                    id: "c".to_string(),
                    kind: "about".to_string(),
                    is_visible: false,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let content = content_of(&site);

        assert!(content.get(SectionKind::Hero).is_some());
        assert!(content.get(SectionKind::About).is_none());
    }

    #[test]
    fn load_site_reports_the_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_site(&path).unwrap_err();
        assert!(err.to_string().contains("site.json"));
    }
}
