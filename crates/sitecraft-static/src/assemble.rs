//! Document assembly: section fragments into a complete standalone page.

use minijinja::{context, Environment};
use sitecraft_model::{
    ContentMap, SectionContent, Site, Template, TemplateCatalog, ThemeRegistry,
};
use sitecraft_render::{escape, RendererRegistry};
use thiserror::Error;

use crate::styles::{ComposeOptions, StyleComposer};

/// Failure while assembling a document.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Unknown template id: {0:?}")]
    UnknownTemplate(String),

    #[error("Document shell render failed: {0}")]
    Shell(#[from] minijinja::Error),
}

/// Assembles section fragments, composed styles, and the behavior script
/// into one self-contained HTML document.
pub struct Assembler {
    env: Environment<'static>,
    renderers: RendererRegistry,
    styles: StyleComposer,
    themes: ThemeRegistry,
    templates: TemplateCatalog,
}

impl Assembler {
    pub fn new(options: ComposeOptions) -> Self {
        let mut env = Environment::new();

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");

        Self {
            env,
            renderers: RendererRegistry::with_builtins(),
            styles: StyleComposer::new(options),
            themes: ThemeRegistry::builtin(),
            templates: TemplateCatalog::builtin(),
        }
    }

    /// Assemble a stored site from its placed components.
    ///
    /// Components render in ascending `order` with hidden ones skipped; a
    /// component whose kind is outside the known set becomes a visible
    /// placeholder rather than failing the document.
    pub fn assemble_site(&self, site: &Site) -> Result<String, AssembleError> {
        let mut body = String::new();
        for component in site.visible_components() {
            let content = component
                .section_kind()
                .map(|kind| SectionContent::from_value(kind, &component.content));
            body.push_str(&self.renderers.render(
                &component.kind,
                content.as_ref(),
                Some(&component.styles),
            ));
        }

        let css = self
            .styles
            .compose(self.themes.get(&site.theme), &site.template, Some(&site.settings));

        let seo = &site.settings.seo;
        let title = seo
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| doc_title(&site.title));

        self.render_shell(ShellContext {
            title,
            description: seo.description.as_deref().or(site.description.as_deref()),
            keywords: &seo.keywords,
            og_image: seo.og_image.as_deref(),
            css: &css,
            body: &body,
            custom_js: site.settings.custom_js.as_deref(),
        })
    }

    /// Assemble a preview of a template with the given content map.
    ///
    /// Sections render in the template's layout order; sections the map
    /// does not cover fall back to the template's seed content.
    pub fn assemble_template(
        &self,
        template_id: &str,
        theme_id: &str,
        content: &ContentMap,
    ) -> Result<String, AssembleError> {
        let template = self
            .templates
            .get(template_id)
            .ok_or_else(|| AssembleError::UnknownTemplate(template_id.to_string()))?;

        let body = self.render_layout(template, content);
        let css = self.styles.compose(self.themes.get(theme_id), &template.id, None);

        let title = content
            .get(sitecraft_model::SectionKind::Header)
            .and_then(|section| match section {
                SectionContent::Header(h) => h.title.clone(),
                _ => None,
            })
            .filter(|t| !t.trim().is_empty());

        self.render_shell(ShellContext {
            title: title.as_deref().unwrap_or(&template.name),
            description: Some(&template.description),
            keywords: &[],
            og_image: None,
            css: &css,
            body: &body,
            custom_js: None,
        })
    }

    fn render_layout(&self, template: &Template, content: &ContentMap) -> String {
        let mut body = String::new();
        for &kind in &template.layout {
            let section = content
                .get(kind)
                .or_else(|| template.default_content.get(kind));
            body.push_str(&self.renderers.render(kind.as_str(), section, None));
        }
        body
    }

    fn render_shell(&self, ctx: ShellContext<'_>) -> Result<String, AssembleError> {
        let tmpl = self.env.get_template("page.html")?;

        // URL policy matches the section renderers; the result is already
        // attribute-escaped, so the shell must not escape it again.
        let og_image = ctx.og_image.map(escape::url);

        let html = tmpl.render(context! {
            title => ctx.title,
            description => ctx.description,
            keywords => ctx.keywords.join(", "),
            og_image => og_image,
            styles => ctx.css,
            content => ctx.body,
            script => BEHAVIOR_SCRIPT,
            custom_js => ctx.custom_js,
        })?;

        Ok(html)
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(ComposeOptions::default())
    }
}

struct ShellContext<'a> {
    title: &'a str,
    description: Option<&'a str>,
    keywords: &'a [String],
    og_image: Option<&'a str>,
    css: &'a str,
    body: &'a str,
    custom_js: Option<&'a str>,
}

fn doc_title(title: &str) -> &str {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        "My Website"
    } else {
        trimmed
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
{% if description %}  <meta name="description" content="{{ description }}">
{% endif %}{% if keywords %}  <meta name="keywords" content="{{ keywords }}">
{% endif %}{% if og_image %}  <meta property="og:image" content="{{ og_image | safe }}">
{% endif %}  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
  <style>
{{ styles | safe }}
  </style>
</head>
<body>
{{ content | safe }}
<script>
{{ script | safe }}
{% if custom_js %}// custom js
{{ custom_js | safe }}
{% endif %}</script>
</body>
</html>
"##;

/// Behavior script shipped with every document: smooth anchor scroll,
/// card lift on hover, and skill meters that fill when scrolled into view.
const BEHAVIOR_SCRIPT: &str = r##"document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
  anchor.addEventListener('click', function (event) {
    var target = document.querySelector(this.getAttribute('href'));
    if (target) {
      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth', block: 'start' });
    }
  });
});

var bars = document.querySelectorAll('.skill-progress');
if ('IntersectionObserver' in window && bars.length) {
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        var bar = entry.target;
        bar.style.width = (bar.dataset.level || 0) + '%';
        observer.unobserve(bar);
      }
    });
  }, { threshold: 0.5 });
  bars.forEach(function (bar) { observer.observe(bar); });
} else {
  bars.forEach(function (bar) {
    bar.style.width = (bar.dataset.level || 0) + '%';
  });
}"##;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitecraft_model::{PlacedComponent, Site};

    use super::*;

    fn content_map(value: serde_json::Value) -> ContentMap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn template_preview_merges_content_over_seed_defaults() {
        let assembler = Assembler::default();
        let content = content_map(json!({
            "header": { "title": "Jane Doe" },
            "contact": { "email": "jane@example.com" }
        }));

        let html = assembler
            .assemble_template("portfolio", "dark", &content)
            .unwrap();

        assert!(html.contains("Jane Doe"));
        assert!(html.contains("mailto:jane@example.com"));
        // Sections the map does not cover come from the template seed.
        assert!(html.contains("class=\"hero\""));
        // Dark theme tokens reach the style block.
        assert!(html.contains("--bg-primary: #111827;"));
    }

    #[test]
    fn unknown_template_id_is_an_error() {
        let assembler = Assembler::default();
        let err = assembler
            .assemble_template("brochure", "light", &ContentMap::new())
            .unwrap_err();

        assert!(matches!(err, AssembleError::UnknownTemplate(id) if id == "brochure"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let assembler = Assembler::default();
        let content = content_map(json!({ "hero": { "title": "Hi" } }));

        let first = assembler
            .assemble_template("landing", "corporate", &content)
            .unwrap();
        let second = assembler
            .assemble_template("landing", "corporate", &content)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn site_components_render_in_order_with_hidden_skipped() {
        let site = Site {
            title: "Ordered".to_string(),
            components: vec![
                PlacedComponent {
                    id: "a".to_string(),
                    kind: "cta".to_string(),
                    content: json!({ "title": "Third Banner" }),
                    order: 3,
                    ..Default::default()
                },
                PlacedComponent {
                    id: "b".to_string(),
                    kind: "hero".to_string(),
                    content: json!({ "title": "First Banner" }),
                    order: 1,
                    ..Default::default()
                },
                PlacedComponent {
                    id: "c".to_string(),
                    kind: "about".to_string(),
                    content: json!({ "title": "Hidden Banner" }),
                    is_visible: false,
                    order: 2,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let html = Assembler::default().assemble_site(&site).unwrap();

        let first = html.find("First Banner").unwrap();
        let third = html.find("Third Banner").unwrap();
        assert!(first < third);
        assert!(!html.contains("Hidden Banner"));
    }

    #[test]
    fn unknown_component_kind_yields_placeholder_not_failure() {
        let site = Site {
            title: "Odd".to_string(),
            components: vec![PlacedComponent {
                id: "x".to_string(),
                kind: "carousel".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let html = Assembler::default().assemble_site(&site).unwrap();

        assert!(html.contains("Unknown component type: carousel"));
    }

    #[test]
    fn seo_settings_take_precedence_in_head() {
        let mut site = Site {
            title: "Plain Title".to_string(),
            ..Default::default()
        };
        site.settings.seo.title = Some("SEO Title".to_string());
        site.settings.seo.description = Some("A described site".to_string());
        site.settings.seo.keywords = vec!["one".to_string(), "two".to_string()];
        site.settings.seo.og_image = Some("https://example.com/og.png".to_string());

        let html = Assembler::default().assemble_site(&site).unwrap();

        assert!(html.contains("<title>SEO Title</title>"));
        assert!(html.contains("content=\"A described site\""));
        assert!(html.contains("content=\"one, two\""));
        assert!(html.contains("property=\"og:image\" content=\"https://example.com/og.png\""));
    }

    #[test]
    fn og_image_with_unsafe_scheme_is_neutralized() {
        let mut site = Site::default();
        site.settings.seo.og_image = Some("javascript:alert(1)".to_string());

        let html = Assembler::default().assemble_site(&site).unwrap();

        assert!(html.contains("property=\"og:image\" content=\"#\""));
        assert!(!html.contains("javascript:alert"));
    }

    #[test]
    fn behavior_script_ships_intact() {
        let html = Assembler::default().assemble_site(&Site::default()).unwrap();

        // The anchor selector carries both quote styles and a hash; any
        // mangling of the script block breaks one of these.
        assert!(html.contains(r##"querySelectorAll('a[href^="#"]')"##));
        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains("</script>"));
    }

    #[test]
    fn custom_js_lands_after_behavior_script() {
        let mut site = Site::default();
        site.settings.custom_js = Some("console.log('mine');".to_string());

        let html = Assembler::default().assemble_site(&site).unwrap();

        let behavior = html.find("IntersectionObserver").unwrap();
        let custom = html.find("console.log('mine')").unwrap();
        assert!(custom > behavior);
    }
}
