//! Site records consumed from the persistence layer.
//!
//! A `Site` is the free-form counterpart of a fixed `Template`: an ordered
//! list of placed components plus per-site settings. The persistence layer
//! owns storage and CRUD; this crate only defines the shapes and the
//! invariant helpers (slug derivation, version bumps, visible ordering).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::section::SectionKind;

/// Per-instance style override applied inline on the rendered fragment so
/// it always beats the global cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentStyles {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub padding: Option<String>,
    // Profile image shape controls (header components only).
    pub profile_image_width: Option<String>,
    pub profile_image_height: Option<String>,
    pub profile_image_border_radius: Option<String>,
}

impl ComponentStyles {
    pub fn is_empty(&self) -> bool {
        *self == ComponentStyles::default()
    }
}

/// Canvas position recorded by the drag-and-drop editor. Not consumed by
/// the compiler, which orders by `order` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One component placed on a site.
///
/// `kind` keeps the raw stored string so that a component whose type is no
/// longer registered renders as a visible placeholder instead of failing to
/// decode the whole site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacedComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Value,
    pub styles: ComponentStyles,
    pub position: Position,
    pub is_visible: bool,
    /// Explicit sort key; the assembler sorts ascending.
    pub order: i64,
}

impl Default for PlacedComponent {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: String::new(),
            content: Value::Null,
            styles: ComponentStyles::default(),
            position: Position::default(),
            is_visible: true,
            order: 0,
        }
    }
}

impl PlacedComponent {
    /// The parsed section kind, if the stored type string is recognized.
    pub fn section_kind(&self) -> Option<SectionKind> {
        SectionKind::parse(&self.kind)
    }
}

/// Theme token overrides stored in site settings. Unset fields keep the
/// selected theme's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub max_width: Option<String>,
    pub padding: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    pub theme: ThemeOverrides,
    pub layout: LayoutSettings,
    pub seo: SeoSettings,
    pub custom_css: Option<String>,
    pub custom_js: Option<String>,
}

/// A user's site as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub user: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Template id the site was seeded from.
    pub template: String,
    /// Theme id; unknown ids resolve to the light theme at render time.
    pub theme: String,
    pub components: Vec<PlacedComponent>,
    pub settings: SiteSettings,
    pub is_published: bool,
    pub is_public: bool,
    pub views: u64,
    /// Monotonic counter, incremented once per successful content mutation.
    pub version: u64,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            id: String::new(),
            user: String::new(),
            title: String::new(),
            slug: String::new(),
            description: None,
            template: "portfolio".to_string(),
            theme: "light".to_string(),
            components: Vec::new(),
            settings: SiteSettings::default(),
            is_published: false,
            is_public: true,
            views: 0,
            version: 1,
        }
    }
}

impl Site {
    /// Visible components in ascending `order`, ties kept in stored order.
    pub fn visible_components(&self) -> Vec<&PlacedComponent> {
        let mut components: Vec<&PlacedComponent> =
            self.components.iter().filter(|c| c.is_visible).collect();
        components.sort_by_key(|c| c.order);
        components
    }

    /// Record a content mutation. Call exactly once per successful update.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

/// Derive a URL-safe slug: lowercase, non-alphanumeric runs collapsed to
/// `-`, leading/trailing `-` stripped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Failure to derive a unique slug.
#[derive(Debug, thiserror::Error)]
pub enum SlugError {
    #[error("Title produced an empty slug: {0:?}")]
    Empty(String),

    #[error("No free slug found for {0:?} after {1} attempts")]
    Exhausted(String, usize),
}

const SLUG_ATTEMPTS: usize = 100;

/// Derive a slug unique under the caller's collision probe.
///
/// `taken` answers whether a candidate is already in use (the persistence
/// layer owns the actual uniqueness index). Collisions retry with a numeric
/// suffix (`slug-2`, `slug-3`, ...) a bounded number of times.
pub fn unique_slug(title: &str, mut taken: impl FnMut(&str) -> bool) -> Result<String, SlugError> {
    let base = slugify(title);
    if base.is_empty() {
        return Err(SlugError::Empty(title.to_string()));
    }

    if !taken(&base) {
        return Ok(base);
    }

    for n in 2..SLUG_ATTEMPTS {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted(base, SLUG_ATTEMPTS))
}
