//! Sitecraft CLI - template-driven static website compiler.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sitecraft")]
#[command(about = "Template-driven static website compiler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sitecraft.toml config file
    #[arg(short, long, default_value = "sitecraft.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a site as a downloadable zip archive
    Export {
        /// Path to the site JSON file
        site: PathBuf,

        /// Output archive path (defaults to "<site-name>.zip")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the embedded stylesheet
        #[arg(long)]
        minify: bool,
    },

    /// Generate a site's public artifact under the sites directory
    Generate {
        /// Path to the site JSON file
        site: PathBuf,

        /// Override the configured sites directory
        #[arg(long)]
        sites_dir: Option<PathBuf>,

        /// Override the configured uploads directory
        #[arg(long)]
        uploads_dir: Option<PathBuf>,
    },

    /// Check a site's content against its template's requirements
    Validate {
        /// Path to the site JSON file
        site: PathBuf,
    },

    /// List the built-in templates
    Templates,

    /// List the built-in themes
    Themes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Export { site, output, minify } => {
            let file_config = config::load(&cli.config)?;
            commands::export::run(&file_config, site, output, minify).await?;
        }
        Commands::Generate { site, sites_dir, uploads_dir } => {
            let file_config = config::load(&cli.config)?;
            commands::generate::run(&file_config, site, sites_dir, uploads_dir).await?;
        }
        Commands::Validate { site } => {
            commands::validate::run(site).await?;
        }
        Commands::Templates => {
            commands::templates::run().await?;
        }
        Commands::Themes => {
            commands::themes::run().await?;
        }
    }

    Ok(())
}
