//! Main entry point for folio.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_common::init_logging;
use folio_config::ConfigLoader;
use folio_site::{PortfolioApp, StartupReport};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render a bilingual portfolio page from JSON documents")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML or TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every section and write the page
    Render {
        /// Language tag to render in; persisted for the session
        #[arg(short, long, env = "FOLIO_LANGUAGE")]
        language: Option<String>,

        /// Output file, overriding the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Switch to the other language, re-render and write the page
    Toggle {
        /// Output file, overriding the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the translation of a dotted key in the current language
    Translate {
        /// Dotted key path, e.g. `hero.title`
        #[arg(value_name = "KEY")]
        key: String,

        /// Text returned when the key does not resolve
        #[arg(short, long)]
        fallback: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(cli.config.as_deref()).context("loading configuration")?;
    let _guard = init_logging(&config.logging.to_logging_config())?;
    info!("Starting folio {}", env!("CARGO_PKG_VERSION"));

    let default_output = config.render.output.clone();
    let app = PortfolioApp::new(config)?;

    match cli.command {
        Commands::Render { language, output } => {
            if let Some(code) = language {
                app.set_language(&code)?;
            }
            let (site, report) = app.start().await;
            let path = site
                .write(&output.unwrap_or(default_output))
                .await?;
            print_summary(&report, &path, site.language_code());
        }
        Commands::Toggle { output } => {
            let (mut site, report) = app.start().await;
            site.toggle_language().await;
            let path = site
                .write(&output.unwrap_or(default_output))
                .await?;
            print_summary(&report, &path, site.language_code());
        }
        Commands::Translate { key, fallback } => {
            let fallback = fallback.map_or(Value::Null, Value::String);
            match app.translate(&key, fallback).await {
                Value::String(text) => println!("{text}"),
                Value::Null => {}
                other => println!("{}", serde_json::to_string_pretty(&other)?),
            }
        }
    }

    Ok(())
}

fn print_summary(report: &StartupReport, path: &std::path::Path, language: &str) {
    println!("Rendered {} ({language})", path.display());
    println!(
        "  sections: {} rendered, {} skipped",
        report.render.rendered.len(),
        report.render.skipped.len()
    );
    if !report.documents.failed.is_empty() {
        println!("  unavailable documents: {}", report.documents.failed.join(", "));
    }
    if !report.dictionary_loaded {
        println!("  translations unavailable");
    }
    println!(
        "  finished at {}",
        report.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
