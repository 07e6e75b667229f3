//! Data model for sitecraft.
//!
//! This crate defines the reference data loaded at process start (templates,
//! themes), the per-section content records supplied by the editor, and the
//! site records consumed from the persistence layer.

pub mod content;
pub mod section;
pub mod site;
pub mod template;
pub mod theme;
pub mod validate;

pub use content::{ContentMap, SectionContent};
pub use section::SectionKind;
pub use site::{
    slugify, unique_slug, ComponentStyles, LayoutSettings, PlacedComponent, Position, SeoSettings,
    Site, SiteSettings, SlugError, ThemeOverrides,
};
pub use template::{Template, TemplateCatalog};
pub use theme::{Theme, ThemeRegistry, ThemeTokens};
pub use validate::{validate_content, ValidationFailure, ValidationReport};
