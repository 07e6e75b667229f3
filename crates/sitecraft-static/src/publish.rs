//! Publishing: write an assembled site to the public directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use sitecraft_model::Site;
use thiserror::Error;
use walkdir::WalkDir;

use crate::assemble::{AssembleError, Assembler};
use crate::styles::ComposeOptions;

/// Where generated sites and user uploads live on disk.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Root directory generated sites are written under.
    pub sites_dir: PathBuf,
    /// Root directory of per-user upload folders, mirrored into each site.
    pub uploads_dir: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            sites_dir: PathBuf::from("generated-sites"),
            uploads_dir: PathBuf::from("uploads"),
        }
    }
}

/// Failure while publishing a site.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Site {0:?} has no owner or slug to publish under")]
    Unaddressed(String),

    #[error("Site {0:?} has an owner or slug that is not a safe path component")]
    UnsafeAddress(String),

    #[error("Failed to assemble site {slug:?}: {source}")]
    Assemble {
        slug: String,
        #[source]
        source: AssembleError,
    },

    #[error("Failed to {step} {path}: {source}")]
    Io {
        step: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A successfully generated site artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSite {
    /// URL path the site is served under.
    pub public_path: String,
    /// Directory the artifact was written to.
    pub dir: PathBuf,
}

/// Writes assembled sites under `{sites_dir}/{owner}/{slug}/`.
pub struct SitePublisher {
    config: PublishConfig,
    assembler: Assembler,
}

impl SitePublisher {
    pub fn new(config: PublishConfig) -> Self {
        Self {
            config,
            assembler: Assembler::new(ComposeOptions::default()),
        }
    }

    /// Generate the static artifact for a site.
    ///
    /// Assembly happens before the previous artifact is touched, so a
    /// failed generate leaves the published site exactly as it was.
    /// Regeneration replaces the directory in place.
    pub async fn generate(&self, site: &Site) -> Result<GeneratedSite, PublishError> {
        if site.user.trim().is_empty() || site.slug.trim().is_empty() {
            return Err(PublishError::Unaddressed(site.id.clone()));
        }
        if !safe_component(&site.user) || !safe_component(&site.slug) {
            return Err(PublishError::UnsafeAddress(site.id.clone()));
        }

        let html = self
            .assembler
            .assemble_site(site)
            .map_err(|source| PublishError::Assemble { slug: site.slug.clone(), source })?;

        let dir = self.config.sites_dir.join(&site.user).join(&site.slug);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|source| PublishError::Io {
                step: "clear directory",
                path: dir.clone(),
                source,
            })?;
        }
        fs::create_dir_all(&dir).map_err(|source| PublishError::Io {
            step: "create directory",
            path: dir.clone(),
            source,
        })?;

        let index = dir.join("index.html");
        fs::write(&index, html).map_err(|source| PublishError::Io {
            step: "write file",
            path: index,
            source,
        })?;

        self.mirror_uploads(&site.user, &dir);

        tracing::info!(user = %site.user, slug = %site.slug, "Generated site");

        Ok(GeneratedSite {
            public_path: format!("/sites/{}/{}/index.html", site.user, site.slug),
            dir,
        })
    }

    /// Remove a previously generated artifact. Absent directories are fine.
    pub async fn delete_generated(&self, user: &str, slug: &str) -> Result<(), PublishError> {
        if !safe_component(user) || !safe_component(slug) {
            return Err(PublishError::UnsafeAddress(format!("{user}/{slug}")));
        }
        let dir = self.config.sites_dir.join(user).join(slug);
        if !dir.exists() {
            return Ok(());
        }
        fs::remove_dir_all(&dir).map_err(|source| PublishError::Io {
            step: "clear directory",
            path: dir,
            source,
        })
    }

    /// Mirror the owner's upload folder into `assets/uploads/`.
    ///
    /// Individual file failures are logged and skipped so one bad upload
    /// cannot sink an otherwise healthy generate.
    fn mirror_uploads(&self, user: &str, site_dir: &Path) {
        let source = self.config.uploads_dir.join(user);
        if !source.is_dir() {
            return;
        }

        let target = site_dir.join("assets").join("uploads");
        for entry in WalkDir::new(&source).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&source) else {
                continue;
            };
            let dest = target.join(relative);
            let copied = dest
                .parent()
                .map(fs::create_dir_all)
                .transpose()
                .and_then(|_| fs::copy(entry.path(), &dest));
            if let Err(error) = copied {
                tracing::warn!(path = %entry.path().display(), %error, "Skipping upload");
            }
        }
    }
}

/// A single path component: no separators, no traversal. Owner and slug
/// come from caller-supplied data and address a tree we delete, so anything
/// that could resolve outside `{sites_dir}/{user}/{slug}` is rejected.
fn safe_component(s: &str) -> bool {
    !s.is_empty() && s != "." && !s.contains("..") && !s.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitecraft_model::PlacedComponent;

    use super::*;

    fn publisher(root: &Path) -> SitePublisher {
        SitePublisher::new(PublishConfig {
            sites_dir: root.join("sites"),
            uploads_dir: root.join("uploads"),
        })
    }

    fn site(title: &str) -> Site {
        Site {
            id: "site-1".to_string(),
            user: "user-1".to_string(),
            title: title.to_string(),
            slug: "my-site".to_string(),
            components: vec![PlacedComponent {
                id: "h".to_string(),
                kind: "hero".to_string(),
                content: json!({ "title": title }),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn generates_index_under_owner_and_slug() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let generated = publisher.generate(&site("Hello There")).await.unwrap();

        assert_eq!(generated.public_path, "/sites/user-1/my-site/index.html");
        let html = fs::read_to_string(generated.dir.join("index.html")).unwrap();
        assert!(html.contains("Hello There"));
    }

    #[tokio::test]
    async fn regenerate_replaces_rather_than_accumulates() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let first = publisher.generate(&site("First Pass")).await.unwrap();
        fs::write(first.dir.join("stale.txt"), "old").unwrap();

        let second = publisher.generate(&site("Second Pass")).await.unwrap();

        assert_eq!(first.dir, second.dir);
        assert!(!second.dir.join("stale.txt").exists());
        let html = fs::read_to_string(second.dir.join("index.html")).unwrap();
        assert!(html.contains("Second Pass"));
        assert!(!html.contains("First Pass"));
    }

    #[tokio::test]
    async fn uploads_are_mirrored_into_assets() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let upload_dir = tmp.path().join("uploads").join("user-1").join("photos");
        fs::create_dir_all(&upload_dir).unwrap();
        fs::write(upload_dir.join("me.png"), [0u8, 1, 2]).unwrap();

        let generated = publisher.generate(&site("With Uploads")).await.unwrap();

        let mirrored = generated
            .dir
            .join("assets")
            .join("uploads")
            .join("photos")
            .join("me.png");
        assert!(mirrored.exists());
    }

    #[tokio::test]
    async fn missing_slug_is_rejected_before_touching_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let mut unaddressed = site("No Slug");
        unaddressed.slug = String::new();

        let err = publisher.generate(&unaddressed).await.unwrap_err();
        assert!(matches!(err, PublishError::Unaddressed(_)));
        assert!(!tmp.path().join("sites").exists());
    }

    #[tokio::test]
    async fn traversal_slug_is_rejected_before_touching_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        // A victim directory outside sites_dir that a traversal slug
        // would resolve to.
        let victim = tmp.path().join("victim");
        fs::create_dir_all(&victim).unwrap();
        fs::write(victim.join("keep.txt"), "important").unwrap();

        let mut hostile = site("Hostile");
        hostile.slug = "../../victim".to_string();

        let err = publisher.generate(&hostile).await.unwrap_err();
        assert!(matches!(err, PublishError::UnsafeAddress(_)));
        assert!(victim.join("keep.txt").exists());

        hostile.slug = "my-site".to_string();
        hostile.user = "..\\elsewhere".to_string();
        let err = publisher.generate(&hostile).await.unwrap_err();
        assert!(matches!(err, PublishError::UnsafeAddress(_)));
    }

    #[tokio::test]
    async fn delete_generated_rejects_traversal_components() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let err = publisher.delete_generated("user-1", "../..").await.unwrap_err();
        assert!(matches!(err, PublishError::UnsafeAddress(_)));
    }

    #[tokio::test]
    async fn delete_generated_removes_the_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = publisher(tmp.path());

        let generated = publisher.generate(&site("Short Lived")).await.unwrap();
        assert!(generated.dir.exists());

        publisher.delete_generated("user-1", "my-site").await.unwrap();
        assert!(!generated.dir.exists());

        // Deleting again is a no-op.
        publisher.delete_generated("user-1", "my-site").await.unwrap();
    }
}
