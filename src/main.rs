//! Article Digest main entry point
//!
//! This is the command-line interface for the Article Digest summarization client.

use anyhow::Context;
use article_digest::config::{load_config_with_hash, validate, Config};
use article_digest::output::{ReportFormat, TerminalView};
use article_digest::{mount, HttpBackend, Orchestrator};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Article Digest: summarize a news article by URL or pasted text
///
/// Posts the article to a summarization backend and prints word statistics
/// together with the extractive and abstractive summaries.
#[derive(Parser, Debug)]
#[command(name = "article-digest")]
#[command(version)]
#[command(about = "Summarize a news article via a summarization backend", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Summarize endpoint, overriding the configuration
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// Article URL to summarize
    #[arg(short, long, default_value = "")]
    url: String,

    /// Article text to summarize
    #[arg(short, long, default_value = "", conflicts_with = "text_file")]
    text: String,

    /// Read the article text from a file ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    text_file: Option<PathBuf>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging and the progress line; results and errors still print
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(cli.config.as_deref(), cli.endpoint.as_deref())?;

    let text = match &cli.text_file {
        Some(path) => read_text(path)?,
        None => cli.text.clone(),
    };

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let backend = HttpBackend::new(&config).context("Failed to build HTTP client")?;
    let orchestrator = Arc::new(Orchestrator::new(backend));
    let form = mount(
        TerminalView::stdio(cli.url, text)
            .with_format(format)
            .with_quiet(cli.quiet),
        orchestrator,
    );

    let outcome = form.submit().await.context("Form task stopped unexpectedly")?;
    form.dispose().await.context("Form task panicked")?;

    // The error is already on screen; only the exit status is left to set
    if outcome.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("article_digest=warn,warn"),
            1 => EnvFilter::new("article_digest=info,warn"),
            2 => EnvFilter::new("article_digest=debug,info"),
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

/// Loads the configuration file if given and applies the endpoint override
fn resolve_config(path: Option<&Path>, endpoint: Option<&str>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        None => Config::default(),
    };

    if let Some(endpoint) = endpoint {
        config.backend.endpoint = endpoint.to_string();
        validate(&config).context("Invalid --endpoint")?;
    }

    tracing::debug!("Using endpoint {}", config.backend.endpoint);
    Ok(config)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
