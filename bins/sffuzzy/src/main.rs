//! sffuzzy: fuzzy search newline-separated candidates from the command line.
//!
//! Reads targets from stdin (or a file), scores them against the search
//! phrase and prints the ranked results as JSON or a table.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use sffuzzy_cli::output::{format_count, format_duration, render_table, Status};
use sffuzzy_telemetry::{stats, Timer};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod input;

use config::Config;
use input::{parse_targets, read_input, InputFormat};

/// Fuzzy search candidates read from stdin
#[derive(Parser)]
#[command(name = "sffuzzy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search terms to find in the given data
    search: String,

    /// Results limit, use -1 for no limit [default: 10]
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Whether or not results are sorted [default: true]
    #[arg(short, long, action = ArgAction::Set)]
    sort: Option<bool>,

    /// Strip accents and special marks from search and data before matching [default: true]
    #[arg(short, long, action = ArgAction::Set)]
    normalize: Option<bool>,

    /// Read targets from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// How the input is structured
    #[arg(long, value_enum, default_value_t = InputFormat::Lines)]
    input_format: InputFormat,

    /// Split each input line once on this delimiter into target and related document
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Configuration file (defaults to .sffuzzy.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print search statistics as JSON on stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON array of results
    Json,
    /// Aligned text table
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let mut logging = config.schema.logging.clone();
    if cli.verbose {
        logging.log_level = "debug".to_string();
    }
    sffuzzy_telemetry::init_with_config(logging)?;

    if cli.search.trim().is_empty() {
        stats().record_empty_phrase();
        bail!("No search term provided, aborting");
    }

    let options = config
        .schema
        .search
        .resolve(cli.sort, cli.normalize, cli.limit);
    tracing::debug!(?options, config = ?config.path, "Resolved search options");

    let timer = Timer::start("read");
    let content = read_input(cli.input.as_deref())?;
    let targets = parse_targets(&content, cli.input_format, cli.delimiter.as_deref())?;
    timer.stop();

    if targets.is_empty() {
        Status::warning("No targets in input");
    }

    let timer = Timer::start("prepare");
    let prepared = sffuzzy::prepare(targets, &options);
    let prepare_time = timer.stop();

    let timer = Timer::start("search");
    let found = sffuzzy::search(&cli.search, &prepared, &options)
        .context("Search phrase produced no result")?;
    let search_time = timer.stop();

    stats().record_search(prepared.len(), found.len());

    if cli.verbose {
        Status::info(&format!(
            "Prepared {} in {}, searched in {}, best score {}",
            format_count(prepared.len(), "target", "targets"),
            format_duration(prepare_time),
            format_duration(search_time),
            found.best_score
        ));
    }

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&found.results)
                .context("Error while converting search results to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let colored = std::io::IsTerminal::is_terminal(&std::io::stdout());
            print!("{}", render_table(&found, colored));
        }
    }

    if cli.stats {
        let report = serde_json::to_string_pretty(&stats().export_json())?;
        eprintln!("{}", report);
    }

    Ok(())
}
