//! # eventol-home-render
//!
//! Render the landing page to a static HTML document, e.g. for a
//! no-JavaScript fallback or a deploy preview.
//!
//! ```bash
//! eventol-home-render --props props.json --out index.html
//! eventol-home-render --props props.json --mobile > mobile.html
//! ```
//!
//! `props.json` uses the same camelCase keys the server template embeds
//! for the browser build.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use eventol_home::render_home;
use eventol_home::types::HomeProps;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "eventol-home-render")]
#[command(about = "Pre-render the eventoL landing page to static HTML")]
#[command(version)]
struct Args {
    /// JSON file with the page props
    #[arg(long)]
    props: PathBuf,

    /// Output file (default: stdout)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render the narrow-viewport header
    #[arg(long)]
    mobile: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_props(path: &Path) -> Result<HomeProps> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read props from {}", path.display()))?;
    let props = HomeProps::from_json(&json)
        .with_context(|| format!("failed to parse props in {}", path.display()))?;
    debug!(tag = %props.tag_slug, "props loaded");
    Ok(props)
}

fn run(args: &Args) -> Result<()> {
    let props = load_props(&args.props)?;
    let html = render_home(&props, args.mobile);

    match &args.out {
        Some(out) => {
            fs::write(out, &html)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), bytes = html.len(), "landing page rendered");
        }
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout may carry the document
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[eventol-home-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
