//! The renderer registry: one registered function per section kind.
//!
//! This replaces the legacy pattern of duplicated `switch` dispatch across
//! independent generators — adding a kind is a single registration here.

use std::collections::HashMap;

use sitecraft_model::{ComponentStyles, SectionContent, SectionKind};

use crate::escape;
use crate::sections;

/// Everything a section renderer may consult. Borrowed, cheap to build per
/// section.
pub struct RenderCtx<'a> {
    pub content: &'a SectionContent,
    /// Inline style attribute for the fragment root, prebuilt with a
    /// leading space, or empty. Local overrides beat the global cascade.
    pub style_attr: &'a str,
    /// Inline style attribute for the header portrait, same convention.
    pub image_style_attr: &'a str,
}

/// A pure, total fragment renderer.
pub type RenderFn = fn(&RenderCtx<'_>) -> String;

/// Registry mapping each section kind to its renderer.
pub struct RendererRegistry {
    renderers: HashMap<SectionKind, RenderFn>,
}

impl RendererRegistry {
    /// Registry with every built-in section renderer registered.
    pub fn with_builtins() -> Self {
        let mut renderers: HashMap<SectionKind, RenderFn> = HashMap::new();

        renderers.insert(SectionKind::Header, sections::header as RenderFn);
        renderers.insert(SectionKind::Hero, sections::hero);
        renderers.insert(SectionKind::About, sections::about);
        renderers.insert(SectionKind::Skills, sections::skills);
        renderers.insert(SectionKind::Projects, sections::projects);
        renderers.insert(SectionKind::Contact, sections::contact);
        renderers.insert(SectionKind::Features, sections::features);
        renderers.insert(SectionKind::Testimonials, sections::testimonials);
        renderers.insert(SectionKind::Cta, sections::cta);
        renderers.insert(SectionKind::Footer, sections::footer);
        renderers.insert(SectionKind::Services, sections::services);
        renderers.insert(SectionKind::Team, sections::team);
        renderers.insert(SectionKind::FeaturedPosts, sections::featured_posts);
        renderers.insert(SectionKind::RecentPosts, sections::recent_posts);
        renderers.insert(SectionKind::Sidebar, sections::sidebar);
        renderers.insert(SectionKind::Gallery, sections::gallery);
        renderers.insert(SectionKind::Experience, sections::experience);
        renderers.insert(SectionKind::Education, sections::education);

        Self { renderers }
    }

    /// Check whether a kind has a registered renderer.
    pub fn contains(&self, kind: SectionKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Render one section by its stored kind string.
    ///
    /// Missing content renders the kind's all-fallback fragment; a kind
    /// string outside the closed set renders a visible placeholder rather
    /// than aborting the document.
    pub fn render(
        &self,
        kind: &str,
        content: Option<&SectionContent>,
        styles: Option<&ComponentStyles>,
    ) -> String {
        let Some((kind, renderer)) = SectionKind::parse(kind)
            .and_then(|k| self.renderers.get(&k).map(|r| (k, *r)))
        else {
            tracing::warn!("No renderer registered for component type {:?}", kind);
            return unknown_placeholder(kind);
        };

        let fallback;
        let content = match content {
            Some(c) if c.kind() == kind => c,
            // A record of the wrong shape is a content defect, not an error.
            _ => {
                fallback = SectionContent::default_for(kind);
                &fallback
            }
        };

        let style_attr = styles.map(inline_style_attr).unwrap_or_default();
        let image_style_attr = styles.map(profile_image_style_attr).unwrap_or_default();
        let ctx = RenderCtx {
            content,
            style_attr: &style_attr,
            image_style_attr: &image_style_attr,
        };
        renderer(&ctx)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// The visible fragment emitted for an unregistered kind.
pub fn unknown_placeholder(kind: &str) -> String {
    format!(
        "<div class=\"component component-unknown\">Unknown component type: {}</div>\n",
        escape::text(kind)
    )
}

/// Build the inline `style` attribute for a per-component override.
///
/// Returned with a leading space so renderers can splice it directly after
/// the root tag's class attribute; empty when no override is set.
pub fn inline_style_attr(styles: &ComponentStyles) -> String {
    if styles.is_empty() {
        return String::new();
    }

    let mut decls: Vec<String> = Vec::new();
    let mut push = |property: &str, value: &Option<String>| {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                decls.push(format!("{property}: {}", value.trim()));
            }
        }
    };

    push("background-color", &styles.background_color);
    push("color", &styles.text_color);
    push("font-family", &styles.font_family);
    push("font-size", &styles.font_size);
    push("font-weight", &styles.font_weight);
    push("padding", &styles.padding);

    if decls.is_empty() {
        return String::new();
    }

    format!(" style=\"{}\"", escape::attr(&decls.join("; ")))
}

/// Build the inline `style` attribute for the header portrait's shape
/// overrides. Same leading-space convention as [`inline_style_attr`].
pub fn profile_image_style_attr(styles: &ComponentStyles) -> String {
    let mut decls: Vec<String> = Vec::new();
    let mut push = |property: &str, value: &Option<String>| {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                decls.push(format!("{property}: {}", value.trim()));
            }
        }
    };

    push("width", &styles.profile_image_width);
    push("height", &styles.profile_image_height);
    push("border-radius", &styles.profile_image_border_radius);

    if decls.is_empty() {
        return String::new();
    }

    format!(" style=\"{}\"", escape::attr(&decls.join("; ")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sitecraft_model::SectionContent;

    use super::*;

    #[test]
    fn every_kind_has_a_builtin_renderer() {
        let registry = RendererRegistry::with_builtins();
        for kind in SectionKind::ALL {
            assert!(registry.contains(kind), "missing renderer for {kind}");
        }
    }

    #[test]
    fn empty_content_renders_fallbacks_for_every_kind() {
        let registry = RendererRegistry::with_builtins();

        for kind in SectionKind::ALL {
            let html = registry.render(kind.as_str(), None, None);
            assert!(!html.is_empty(), "{kind} rendered nothing");
            assert!(!html.contains("Unknown component type"), "{kind} fell through");
        }
    }

    #[test]
    fn unknown_kind_renders_visible_placeholder() {
        let registry = RendererRegistry::with_builtins();
        let html = registry.render("carousel", None, None);

        assert!(html.contains("Unknown component type: carousel"));
    }

    #[test]
    fn unknown_kind_is_escaped_in_placeholder() {
        let registry = RendererRegistry::with_builtins();
        let html = registry.render("<script>", None, None);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn mismatched_content_shape_falls_back_to_defaults() {
        let registry = RendererRegistry::with_builtins();
        let hero = SectionContent::from_value(
            SectionKind::Hero,
            &json!({ "title": "Hi there" }),
        );

        // Hero content handed to the header renderer: defect, not a panic.
        let html = registry.render("header", Some(&hero), None);
        assert!(html.contains("Your Name"));
    }

    #[test]
    fn style_overrides_become_inline_attribute() {
        let registry = RendererRegistry::with_builtins();
        let styles = ComponentStyles {
            background_color: Some("#fafafa".to_string()),
            padding: Some("2rem".to_string()),
            ..Default::default()
        };

        let html = registry.render("about", None, Some(&styles));
        assert!(html.contains("style=\"background-color: #fafafa; padding: 2rem\""));
    }

    #[test]
    fn empty_style_override_adds_no_attribute() {
        assert_eq!(inline_style_attr(&ComponentStyles::default()), "");
    }
}
