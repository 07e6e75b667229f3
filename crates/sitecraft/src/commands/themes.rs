//! List the built-in themes.

use anyhow::Result;
use sitecraft_model::ThemeRegistry;

/// Run the themes command.
pub async fn run() -> Result<()> {
    let registry = ThemeRegistry::builtin();

    for theme in registry.all() {
        println!(
            "{:<12} {:<16} primary {}  background {}",
            theme.id, theme.name, theme.tokens.primary_color, theme.tokens.bg_primary
        );
    }

    Ok(())
}
