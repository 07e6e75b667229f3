//! List the built-in templates.

use anyhow::Result;
use sitecraft_model::TemplateCatalog;

/// Run the templates command.
pub async fn run() -> Result<()> {
    let catalog = TemplateCatalog::builtin();

    for template in catalog.all() {
        println!("{:<12} {}", template.id, template.name);
        println!("{:<12} {}", "", template.description);
        let sections: Vec<&str> = template.layout.iter().map(|k| k.as_str()).collect();
        println!("{:<12} sections: {}", "", sections.join(", "));
        println!();
    }

    Ok(())
}
