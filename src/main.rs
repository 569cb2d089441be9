//! Bubuwi main entry point
//!
//! Command-line interface: scrape one page and print its normalized record
//! as JSON.

use anyhow::Context;
use bubuwi::config::load_config_with_hash;
use bubuwi::fetch::SourceDocument;
use bubuwi::{BubuwiError, Config, PageRequest, PageResult, Pipeline, Response};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Bubuwi: anime release scraper
///
/// Without a page option, scrapes the latest releases. When several are
/// given, --url wins over --series, which wins over --search.
#[derive(Parser, Debug)]
#[command(name = "bubuwi")]
#[command(version)]
#[command(about = "Scrape anime listings, search results, series and episodes", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Episode page URL: extract the title and video sources
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Series page URL: extract the episode list and metadata
    #[arg(long, value_name = "URL")]
    series: Option<String>,

    /// Search term
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// Extract from a saved document instead of fetching it
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let request = PageRequest::from_params(
        cli.url.as_deref(),
        cli.series.as_deref(),
        cli.search.as_deref(),
    );

    let pipeline = Pipeline::new(config)?;

    let response = match &cli.input {
        Some(path) => Response::from_result(extract_saved(&pipeline, &request, path)),
        None => pipeline.respond(&request).await,
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response.body)?
    } else {
        serde_json::to_string(&response.body)?
    };
    println!("{}", output);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the JSON record.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bubuwi=info,warn"),
            1 => EnvFilter::new("bubuwi=debug,info"),
            2 => EnvFilter::new("bubuwi=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs the request's extractor on a document read from disk
///
/// The document is treated as if fetched from the request's endpoint, so
/// relative links resolve the same way they would live.
fn extract_saved(
    pipeline: &Pipeline,
    request: &PageRequest,
    path: &Path,
) -> Result<PageResult, BubuwiError> {
    let (url, kind) = pipeline.endpoint(request)?;
    tracing::info!("Extracting {} page from {}", request.type_tag(), path.display());

    let body = std::fs::read_to_string(path)?;
    pipeline.extract_document(request, SourceDocument::new(url, kind, body))
}
