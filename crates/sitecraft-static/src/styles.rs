//! Style composer: one stylesheet from base rules, theme tokens, template
//! layout, and per-site overrides.
//!
//! Layer order, lowest to highest precedence:
//! 1. base reset/utility rules, identical for every template
//! 2. theme token `:root` block
//! 3. template-specific layout rules
//! 4. per-site settings (layout vars + custom CSS verbatim, always last)
//!
//! Per-component style overrides are deliberately absent here: the renderer
//! applies them as inline attributes so a local override beats the cascade.

use sitecraft_model::{SiteSettings, Theme};

/// Composer options.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Minify the composed stylesheet. Off by default: raw output is the
    /// byte-deterministic contract, minification is an explicit opt-in.
    pub minify: bool,
}

/// Composes the single `<style>` payload for an assembled document.
#[derive(Debug, Clone, Default)]
pub struct StyleComposer {
    options: ComposeOptions,
}

impl StyleComposer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    /// Compose the full stylesheet. Pure: identical inputs yield
    /// byte-identical output.
    pub fn compose(&self, theme: &Theme, template_id: &str, settings: Option<&SiteSettings>) -> String {
        let mut css = String::with_capacity(8 * 1024);

        css.push_str(BASE_CSS);
        css.push('\n');
        css.push_str(&theme_block(theme));
        css.push('\n');
        css.push_str(template_block(template_id));

        if let Some(settings) = settings {
            let overrides = settings_block(settings);
            if !overrides.is_empty() {
                css.push('\n');
                css.push_str(&overrides);
            }
            if let Some(custom) = settings.custom_css.as_deref() {
                if !custom.trim().is_empty() {
                    css.push_str("\n/* custom css */\n");
                    css.push_str(custom);
                    css.push('\n');
                }
            }
        }

        if self.options.minify {
            minify(&css).unwrap_or(css)
        } else {
            css
        }
    }
}

/// CSS custom-property declarations for a theme's token set.
fn theme_block(theme: &Theme) -> String {
    let t = &theme.tokens;
    format!(
        ":root {{\n  --primary-color: {};\n  --primary-hover: {};\n  --text-primary: {};\n  --text-secondary: {};\n  --bg-primary: {};\n  --bg-secondary: {};\n  --border-color: {};\n  --shadow: {};\n}}\n",
        t.primary_color,
        t.primary_hover,
        t.text_primary,
        t.text_secondary,
        t.bg_primary,
        t.bg_secondary,
        t.border_color,
        t.shadow,
    )
}

/// Template-specific layout rules. Unknown ids fall back to the portfolio
/// block so a stale template reference still yields a styled document.
fn template_block(template_id: &str) -> &'static str {
    match template_id {
        "landing" => LANDING_CSS,
        "business" => BUSINESS_CSS,
        "blog" => BLOG_CSS,
        _ => PORTFOLIO_CSS,
    }
}

/// Per-site layout overrides as re-declared custom properties.
fn settings_block(settings: &SiteSettings) -> String {
    let mut decls = Vec::new();

    let mut push = |name: &str, value: &Option<String>| {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            decls.push(format!("  {name}: {};", value.trim()));
        }
    };

    push("--primary-color", &settings.theme.primary_color);
    push("--primary-hover", &settings.theme.secondary_color);
    push("--bg-primary", &settings.theme.background_color);
    push("--text-primary", &settings.theme.text_color);
    push("--font-family", &settings.theme.font_family);
    push("--content-max-width", &settings.layout.max_width);
    push("--site-padding", &settings.layout.padding);
    push("--section-spacing", &settings.layout.spacing);

    if decls.is_empty() {
        String::new()
    } else {
        format!(":root {{\n{}\n}}\n", decls.join("\n"))
    }
}

/// Minify with lightningcss; parse failures fall back to the raw sheet.
fn minify(css: &str) -> Option<String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default()).ok()?;
    let minified = stylesheet
        .to_css(PrinterOptions { minify: true, ..Default::default() })
        .ok()?;

    Some(minified.code)
}

const BASE_CSS: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

:root {
  --font-family: 'Inter', system-ui, sans-serif;
  --content-max-width: 1200px;
  --site-padding: 1rem;
  --section-spacing: 4rem;
}

body {
  font-family: var(--font-family);
  line-height: 1.6;
  color: var(--text-primary);
  background-color: var(--bg-primary);
}

.container {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 0 var(--site-padding);
}

.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  text-decoration: none;
  font-weight: 500;
  transition: all 0.2s ease;
  cursor: pointer;
  border: none;
}

.btn-primary {
  background-color: var(--primary-color);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-hover);
}

.btn-secondary {
  background-color: var(--bg-secondary);
  color: var(--text-primary);
  border: 1px solid var(--border-color);
}

.btn-inverse {
  background: white;
  color: var(--primary-color);
  margin-top: 1rem;
}

.section {
  padding: var(--section-spacing) 0;
}

.text-center {
  text-align: center;
}

.grid {
  display: grid;
  gap: 2rem;
}

.grid-cols-2 { grid-template-columns: repeat(2, 1fr); }
.grid-cols-3 { grid-template-columns: repeat(3, 1fr); }

.header {
  background-color: var(--bg-primary);
  border-bottom: 1px solid var(--border-color);
  position: sticky;
  top: 0;
  z-index: 100;
}

.nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 0;
}

.nav-links {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-links a {
  color: var(--text-primary);
  text-decoration: none;
  font-weight: 500;
}

.profile-image {
  width: 150px;
  height: 150px;
  border-radius: 50%;
  object-fit: cover;
  margin-top: 1rem;
}

.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
}

.hero-content {
  text-align: center;
}

.hero h1 {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.hero p {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.skill-chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  justify-content: center;
  margin-top: 1rem;
}

.skill-chip {
  background: var(--primary-color);
  color: white;
  padding: 0.25rem 0.75rem;
  border-radius: 1rem;
  font-size: 0.875rem;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
  gap: 2rem;
  margin-top: 2rem;
}

.stat-number {
  font-size: 2rem;
  font-weight: 700;
  color: var(--primary-color);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  max-width: 800px;
  margin: 2rem auto 0;
}

.skill-item {
  background: var(--bg-secondary);
  padding: 1.5rem;
  border-radius: 0.5rem;
  box-shadow: var(--shadow);
}

.skill-name {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.skill-level {
  height: 8px;
  background: var(--border-color);
  border-radius: 4px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  background: var(--primary-color);
  transition: width 0.3s ease;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  margin-top: 2rem;
}

.project-card {
  background: var(--bg-primary);
  border: 1px solid var(--border-color);
  border-radius: 0.5rem;
  overflow: hidden;
  box-shadow: var(--shadow);
  transition: transform 0.2s ease;
}

.project-image {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.project-content {
  padding: 1.5rem;
}

.project-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 0.75rem 0;
}

.tech-tag {
  background: var(--primary-color);
  color: white;
  padding: 0.25rem 0.75rem;
  border-radius: 20px;
  font-size: 0.8rem;
}

.contact-info {
  max-width: 600px;
  margin: 0 auto;
}

.contact-item {
  margin-top: 1rem;
  font-size: 1.1rem;
}

.contact-item a {
  color: var(--primary-color);
  text-decoration: none;
}

.social-links {
  margin-top: 2rem;
}

.social-link {
  color: var(--primary-color);
  text-decoration: none;
  font-weight: 500;
  margin: 0 0.5rem;
}

.features-grid,
.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
  margin-top: 2rem;
}

.feature-card,
.service-card {
  background: var(--bg-secondary);
  padding: 2rem;
  border-radius: 0.5rem;
  box-shadow: var(--shadow);
  text-align: center;
  transition: transform 0.2s ease;
}

.card-icon {
  margin-bottom: 1rem;
}

.testimonial-card {
  background: var(--bg-secondary);
  padding: 2rem;
  border-radius: 0.5rem;
  box-shadow: var(--shadow);
}

.testimonial-avatar {
  width: 60px;
  height: 60px;
  border-radius: 50%;
  object-fit: cover;
  margin-bottom: 1rem;
}

.testimonial-role {
  color: var(--text-secondary);
}

.cta {
  background: var(--primary-color);
  color: white;
}

.footer {
  background: var(--bg-secondary);
}

.footer-nav {
  margin-top: 2rem;
}

.footer-link {
  color: var(--text-secondary);
  text-decoration: none;
  margin: 0 1rem;
}

.team-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
  margin-top: 2rem;
}

.team-card {
  background: var(--bg-secondary);
  padding: 2rem;
  border-radius: 0.5rem;
  box-shadow: var(--shadow);
  text-align: center;
}

.team-avatar {
  width: 150px;
  height: 150px;
  border-radius: 50%;
  object-fit: cover;
  margin-bottom: 1rem;
}

.team-role {
  color: var(--primary-color);
  font-weight: 500;
}

.post-card {
  background: var(--bg-primary);
  border: 1px solid var(--border-color);
  border-radius: 0.5rem;
  overflow: hidden;
  box-shadow: var(--shadow);
  margin-top: 2rem;
}

.post-image {
  width: 100%;
  height: 250px;
  object-fit: cover;
}

.post-content {
  padding: 1.5rem;
}

.post-meta {
  margin-top: 0.75rem;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.post-row {
  padding: 1rem 0;
  border-bottom: 1px solid var(--border-color);
}

.sidebar {
  background: var(--bg-secondary);
  padding: 2rem;
  border-radius: 0.5rem;
}

.sidebar-avatar {
  width: 100px;
  height: 100px;
  border-radius: 50%;
  object-fit: cover;
  margin-bottom: 1rem;
}

.sidebar-categories {
  margin-top: 2rem;
}

.category-list {
  list-style: none;
  margin-top: 1rem;
}

.category-list li {
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--border-color);
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
  gap: 1rem;
  margin-top: 2rem;
}

.gallery-item img {
  width: 100%;
  height: 200px;
  object-fit: cover;
  border-radius: 0.5rem;
}

.gallery-item figcaption {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.timeline {
  max-width: 700px;
  margin: 2rem auto 0;
}

.timeline-item {
  padding: 1.5rem 0 1.5rem 1.5rem;
  border-left: 2px solid var(--primary-color);
}

.timeline-sub {
  color: var(--text-secondary);
}

.timeline-period {
  margin-left: 0.5rem;
  font-size: 0.875rem;
}

.component-unknown {
  background: var(--bg-secondary);
  border: 1px dashed var(--border-color);
  color: var(--text-secondary);
  padding: 2rem;
  text-align: center;
}

@media (hover: hover) {
  .project-card:hover,
  .feature-card:hover,
  .service-card:hover {
    transform: translateY(-4px);
  }
}

@media (max-width: 768px) {
  .hero h1 { font-size: 2rem; }
  .grid-cols-2, .grid-cols-3 { grid-template-columns: 1fr; }
  .nav-links { gap: 1rem; }
}
"#;

const PORTFOLIO_CSS: &str = r#".hero {
  background: linear-gradient(135deg, var(--bg-primary) 0%, var(--bg-secondary) 100%);
}
"#;

const LANDING_CSS: &str = r#".hero {
  background: linear-gradient(135deg, var(--primary-color) 0%, var(--primary-hover) 100%);
  color: white;
}

.hero p {
  color: rgba(255, 255, 255, 0.9);
}
"#;

const BUSINESS_CSS: &str = r#".hero {
  background: var(--bg-secondary);
}

.hero h1 {
  color: var(--primary-color);
}
"#;

const BLOG_CSS: &str = r#".hero {
  background: var(--bg-secondary);
  min-height: 40vh;
}

.post-card:first-of-type {
  margin-top: 1rem;
}
"#;

#[cfg(test)]
mod tests {
    use sitecraft_model::ThemeRegistry;

    use super::*;

    #[test]
    fn composes_idempotently() {
        let registry = ThemeRegistry::builtin();
        let composer = StyleComposer::default();

        let first = composer.compose(registry.get("dark"), "portfolio", None);
        let second = composer.compose(registry.get("dark"), "portfolio", None);

        assert_eq!(first, second);
    }

    #[test]
    fn theme_tokens_land_in_root_block() {
        let registry = ThemeRegistry::builtin();
        let css = StyleComposer::default().compose(registry.get("dark"), "portfolio", None);

        assert!(css.contains("--bg-primary: #111827;"));
        assert!(css.contains("--primary-color: #60a5fa;"));
    }

    #[test]
    fn base_rules_precede_theme_tokens() {
        let registry = ThemeRegistry::builtin();
        let css = StyleComposer::default().compose(registry.get("dark"), "portfolio", None);

        let base = css.find("box-sizing: border-box").unwrap();
        let theme = css.find("--bg-primary: #111827").unwrap();
        let template = css.find("linear-gradient").unwrap();
        assert!(base < theme);
        assert!(theme < template);
    }

    #[test]
    fn unknown_template_falls_back_to_portfolio_block() {
        let registry = ThemeRegistry::builtin();
        let composer = StyleComposer::default();

        let unknown = composer.compose(registry.get("light"), "brochure", None);
        let portfolio = composer.compose(registry.get("light"), "portfolio", None);

        assert_eq!(unknown, portfolio);
    }

    #[test]
    fn custom_css_is_appended_last() {
        let registry = ThemeRegistry::builtin();
        let settings = sitecraft_model::SiteSettings {
            custom_css: Some(".mine { color: red; }".to_string()),
            ..Default::default()
        };

        let css = StyleComposer::default().compose(registry.get("light"), "portfolio", Some(&settings));

        let custom_pos = css.find(".mine").unwrap();
        let base_pos = css.find(".container").unwrap();
        assert!(custom_pos > base_pos);
    }

    #[test]
    fn layout_overrides_redeclare_variables() {
        let registry = ThemeRegistry::builtin();
        let settings = sitecraft_model::SiteSettings {
            layout: sitecraft_model::LayoutSettings {
                max_width: Some("960px".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let css = StyleComposer::default().compose(registry.get("light"), "portfolio", Some(&settings));

        assert!(css.contains("--content-max-width: 960px;"));
        // The override block comes after the base declaration so it wins.
        let base = css.find("--content-max-width: 1200px").unwrap();
        let over = css.rfind("--content-max-width: 960px").unwrap();
        assert!(over > base);
    }
}
