//! Theme registry: named sets of design tokens.

use serde::{Deserialize, Serialize};

/// The fixed token set every theme provides.
///
/// Tokens become CSS custom properties in the composed stylesheet; selecting
/// a theme never alters the template or content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub primary_color: String,
    pub primary_hover: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub bg_primary: String,
    pub bg_secondary: String,
    pub border_color: String,
    pub shadow: String,
}

/// A named theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub tokens: ThemeTokens,
}

/// Read-only registry of the built-in themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Registry with the five built-in themes.
    pub fn builtin() -> Self {
        let themes = vec![
            theme(
                "light",
                "Light",
                ["#3b82f6", "#2563eb", "#1f2937", "#6b7280", "#ffffff", "#f9fafb", "#e5e7eb"],
                "0 1px 3px 0 rgba(0, 0, 0, 0.1)",
            ),
            theme(
                "dark",
                "Dark",
                ["#60a5fa", "#3b82f6", "#f9fafb", "#d1d5db", "#111827", "#1f2937", "#374151"],
                "0 1px 3px 0 rgba(0, 0, 0, 0.3)",
            ),
            theme(
                "corporate",
                "Corporate",
                ["#1e40af", "#1e3a8a", "#1f2937", "#6b7280", "#ffffff", "#f8fafc", "#e2e8f0"],
                "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            ),
            theme(
                "funky",
                "Funky",
                ["#ec4899", "#db2777", "#1f2937", "#6b7280", "#ffffff", "#fdf2f8", "#fce7f3"],
                "0 10px 15px -3px rgba(236, 72, 153, 0.1)",
            ),
            theme(
                "minimal",
                "Minimal",
                ["#000000", "#374151", "#000000", "#6b7280", "#ffffff", "#ffffff", "#e5e7eb"],
                "none",
            ),
        ];

        Self { themes }
    }

    /// Look up a theme by id, falling back to `light` for unknown ids.
    pub fn get(&self, id: &str) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.id == id)
            .unwrap_or(&self.themes[0])
    }

    /// All themes, in registration order.
    pub fn all(&self) -> &[Theme] {
        &self.themes
    }
}

fn theme(id: &str, name: &str, colors: [&str; 7], shadow: &str) -> Theme {
    let [primary, hover, text, text2, bg, bg2, border] = colors;
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        tokens: ThemeTokens {
            primary_color: primary.to_string(),
            primary_hover: hover.to_string(),
            text_primary: text.to_string(),
            text_secondary: text2.to_string(),
            bg_primary: bg.to_string(),
            bg_secondary: bg2.to_string(),
            border_color: border.to_string(),
            shadow: shadow.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_builtin_themes() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(registry.get("dark").tokens.bg_primary, "#111827");
        assert_eq!(registry.get("minimal").tokens.shadow, "none");
        assert_eq!(registry.all().len(), 5);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(registry.get("does-not-exist").id, "light");
    }
}
