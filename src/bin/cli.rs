//! CLI binary for blogrank.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use blogrank::export::{self, DEFAULT_CSV_FILENAME};
use blogrank::{AppConfig, BatchState, ProgressCallback, ProgressEvent, RankChecker};
use blogrank_search::SerperEngine;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// blogrank: check where blog URLs rank in organic search results.
#[derive(Parser)]
#[command(name = "blogrank", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Check a batch of `keyword,url` lines.
    Check {
        /// Input file with one `keyword,url` per line, or `-` for stdin.
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Where to write the CSV export.
        #[arg(short, long, default_value = DEFAULT_CSV_FILENAME)]
        output: PathBuf,

        /// Also write results (with lookup error messages) as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Do not draw a progress bar or print the result table.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blogrank=info,blogrank_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);

    match cli.command {
        Command::Check {
            input,
            output,
            json,
            quiet,
        } => {
            let config = load_config(&config_path, cli.config.is_some())?;
            run_check(config, &input, &output, json.as_deref(), quiet).await
        }
        Command::InitConfig { force } => init_config(&config_path, force),
    }
}

/// Load the config file (if present) and apply the API key from the environment.
///
/// A missing file is only an error when the path was given explicitly.
fn load_config(path: &Path, explicit: bool) -> anyhow::Result<AppConfig> {
    let mut config = if path.exists() || explicit {
        AppConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?
    } else {
        debug!(path = %path.display(), "no config file, using defaults");
        AppConfig::default()
    };
    config.apply_env();
    config.validate().with_context(|| {
        format!(
            "invalid configuration (set {} or edit {})",
            blogrank::config::API_KEY_ENV,
            path.display()
        )
    })?;
    Ok(config)
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to_file(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
    }
}

async fn run_check(
    config: AppConfig,
    input: &Path,
    output: &Path,
    json: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let parsed = blogrank::parse_pairs_with_report(&raw);
    if !parsed.skipped.is_empty() {
        warn!(
            skipped = parsed.skipped.len(),
            "ignoring lines without both a keyword and a URL"
        );
        for line in &parsed.skipped {
            debug!(line = line.line_number, content = %line.content, "skipped line");
        }
    }
    if parsed.pairs.is_empty() {
        println!("No keyword,url pairs to check.");
        export::write_outputs(output, json, &[])?;
        return Ok(());
    }

    let engine = SerperEngine::new(config.search.clone())?;
    let checker = RankChecker::new(engine).with_pacing(config.pacing);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        progress_bar()
    };
    let callback = bar_callback(bar.clone());

    let state = checker
        .run(BatchState::new(parsed.pairs), Some(&callback), &cancel)
        .await;
    bar.finish_and_clear();

    if state.is_cancelled() {
        warn!(
            checked = state.processed(),
            total = state.total(),
            "cancelled, exporting partial results"
        );
    }

    let results = state.into_results();
    if !quiet {
        print!("{}", export::render_table(&results));
    }

    export::write_outputs(output, json, &results)?;
    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    if let Ok(style) = ProgressStyle::with_template("  {msg} [{bar:30}] {pos}% Done") {
        pb.set_style(style);
    }
    pb
}

/// Feed pipeline progress events into the bar.
fn bar_callback(bar: ProgressBar) -> ProgressCallback {
    Box::new(move |event| match event {
        ProgressEvent::Started { total } => {
            bar.set_message(format!("Checking {total} keywords"));
            bar.set_position(0);
        }
        ProgressEvent::PairChecked {
            keyword,
            rank,
            percent,
            ..
        } => {
            bar.set_message(format!("{keyword}: {rank}"));
            bar.set_position(u64::from(percent));
        }
        ProgressEvent::Completed { checked } => {
            bar.set_message(format!("Checked {checked} keywords"));
            bar.set_position(100);
        }
        ProgressEvent::Cancelled { checked, total } => {
            bar.abandon_with_message(format!("Cancelled after {checked}/{total}"));
        }
    })
}
