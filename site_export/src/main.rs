//! # siggly-export
//!
//! Renders the built-in Siggly landing pages to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Export every live page to ./dist
//! siggly-export
//!
//! # Only migration pages, including unreleased ones
//! siggly-export --category migrate --include-coming-soon --out public
//!
//! # Print routes without writing anything
//! siggly-export --list
//! ```
//!
//! Settings can also live in `siggly.toml`; flags override the file.

mod config;
mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use siggly_pages::DocumentOptions;
use siggly_pages::content::ContentRegistry;
use siggly_pages::types::Category;
use tracing::info;

use config::{DEFAULT_CONFIG_FILE, ExportConfig};
use export::Selection;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "siggly-export")]
#[command(about = "Export the Siggly SEO landing pages as static HTML")]
#[command(version)]
struct Args {
    /// Output directory (default: dist, or out_dir from the config file)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Config file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Only export this category (repeatable), e.g. email-signatures, migrate
    #[arg(long = "category", value_name = "SEG")]
    categories: Vec<Category>,

    /// Also export pages marked coming-soon
    #[arg(long)]
    include_coming_soon: bool,

    /// Origin used for canonical links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print selected routes and exit without writing files
    #[arg(long)]
    list: bool,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug)]
struct Settings {
    out_dir: PathBuf,
    options: DocumentOptions,
    selection: Selection,
}

impl Settings {
    fn resolve(args: &Args, config: ExportConfig) -> Self {
        let categories = if args.categories.is_empty() {
            config.categories
        } else {
            args.categories.clone()
        };

        Self {
            out_dir: args.out.clone().unwrap_or(config.out_dir),
            options: DocumentOptions {
                base_url: args.base_url.clone().unwrap_or(config.base_url),
                ..DocumentOptions::default()
            },
            selection: Selection {
                categories,
                include_coming_soon: args.include_coming_soon || config.include_coming_soon,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries routes and the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting siggly-export v{}", env!("CARGO_PKG_VERSION"));

    let config = ExportConfig::load_from_path(&args.config);
    let settings = Settings::resolve(&args, config);

    let registry = ContentRegistry::builtin().context("Built-in landing page content is invalid")?;
    let selected = export::select(registry, &settings.selection);

    if args.list {
        for page in &selected.pages {
            println!("{}", page.route());
        }
        return Ok(());
    }

    let written = export::write_site(&selected.pages, &settings.out_dir, &settings.options)?;

    println!(
        "Exported {} pages to {} ({} coming-soon skipped)",
        written,
        settings.out_dir.display(),
        selected.skipped_coming_soon
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "siggly-export",
            "--out",
            "public",
            "--category",
            "guides",
            "--base-url",
            "https://preview.siggly.io",
        ]);
        let config = ExportConfig {
            out_dir: PathBuf::from("from-config"),
            base_url: "https://config.siggly.io".into(),
            include_coming_soon: true,
            categories: vec![Category::Features],
        };

        let settings = Settings::resolve(&args, config);
        assert_eq!(settings.out_dir, PathBuf::from("public"));
        assert_eq!(settings.options.base_url, "https://preview.siggly.io");
        assert_eq!(settings.selection.categories, vec![Category::Guides]);
        // either source can turn coming-soon pages on
        assert!(settings.selection.include_coming_soon);
    }

    #[test]
    fn config_fills_missing_flags() {
        let args = Args::parse_from(["siggly-export"]);
        let settings = Settings::resolve(&args, ExportConfig::default());
        assert_eq!(settings.out_dir, PathBuf::from("dist"));
        assert_eq!(settings.options.base_url, "https://siggly.io");
        assert!(settings.selection.categories.is_empty());
        assert!(!settings.selection.include_coming_soon);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Args::try_parse_from(["siggly-export", "--category", "pricing"]).is_err());
    }
}
