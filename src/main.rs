//! fantasydata-scraper main entry point
//!
//! Command-line interface: load config, log in, assemble the requested
//! datasets, and export them as JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fantasydata_scraper::config::{load_config_with_hash, validate, Config, Credentials, Position};
use fantasydata_scraper::output::{print_summary, DatasetWriter};
use fantasydata_scraper::scrape::{Assembler, Endpoints, Session};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// fantasydata-scraper: weekly stats, projections and salaries from FantasyData
///
/// Credentials are read from the FANTASYDATA_EMAIL and FANTASYDATA_PASSWORD
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "fantasydata-scraper")]
#[command(version)]
#[command(about = "Scrape FantasyData tables into per-position datasets", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Which datasets to scrape
    #[arg(long, value_enum, default_value_t = Dataset::All)]
    dataset: Dataset,

    /// Override the configured season
    #[arg(long)]
    season: Option<u16>,

    /// Override the first week
    #[arg(long)]
    week_from: Option<u8>,

    /// Override the last week
    #[arg(long)]
    week_to: Option<u8>,

    /// Override the positions (repeatable, e.g. --position qb --position dst)
    #[arg(long = "position", value_parser = parse_position)]
    positions: Vec<Position>,

    /// Validate config and show what would be scraped without logging in
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dataset {
    Stats,
    Projections,
    Salaries,
    All,
}

impl Dataset {
    fn includes(self, other: Dataset) -> bool {
        self == Dataset::All || self == other
    }
}

fn parse_position(value: &str) -> Result<Position, String> {
    Position::parse(value).ok_or_else(|| {
        let known: Vec<&str> = Position::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown position '{}', expected one of {}", value, known.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&mut config, &cli);
    validate(&config).context("Invalid command-line overrides")?;

    if cli.dry_run {
        handle_dry_run(&config, cli.dataset);
        return Ok(());
    }

    handle_scrape(&config, &config_hash, cli.dataset).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fantasydata_scraper=info,warn"),
            1 => EnvFilter::new("fantasydata_scraper=debug,info"),
            2 => EnvFilter::new("fantasydata_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(season) = cli.season {
        config.query.season = season;
    }
    if let Some(week_from) = cli.week_from {
        config.query.week_from = week_from;
    }
    if let Some(week_to) = cli.week_to {
        config.query.week_to = week_to;
    }
    if !cli.positions.is_empty() {
        config.query.positions = cli.positions.clone();
    }
}

/// Handles the --dry-run mode: shows what would be scraped
fn handle_dry_run(config: &Config, dataset: Dataset) {
    println!("=== fantasydata-scraper Dry Run ===\n");

    println!("Provider:");
    println!("  Base URL: {}", config.provider.base_url);
    println!("  Login: {}", config.provider.login_path);
    println!("  Token field: {}", config.provider.token_field);

    println!("\nQuery:");
    println!("  Season: {} ({})", config.query.season, config.query.season_type);
    println!("  {}", config.query.weeks());
    let positions: Vec<&str> = config.query.positions.iter().map(|p| p.as_str()).collect();
    println!("  Positions: {}", positions.join(", "));
    println!("  Scoring: {}", config.query.scoring);
    println!("  Operator: {}", config.query.operator);
    println!(
        "  Empty page retries: {}",
        config.pagination.empty_page_retries
    );

    println!("\nDatasets:");
    for (name, kind, path) in [
        ("stats", Dataset::Stats, &config.provider.stats_path),
        ("projections", Dataset::Projections, &config.provider.projections_path),
        ("salaries", Dataset::Salaries, &config.provider.salaries_path),
    ] {
        if dataset.includes(kind) {
            println!("  - {} ({})", name, path);
        }
    }

    println!("\nOutput: {}", config.output.directory);
    println!("\n✓ Configuration is valid");
}

/// Logs in, assembles the requested datasets and writes them out
async fn handle_scrape(config: &Config, config_hash: &str, dataset: Dataset) -> anyhow::Result<()> {
    let credentials = Credentials::from_env()?;
    let endpoints = Endpoints::from_config(&config.provider)?;

    let session = Session::authenticate(
        &config.user_agent,
        &endpoints.login,
        &config.provider.token_field,
        &credentials,
    )
    .await
    .context("Login failed")?;

    let assembler =
        Assembler::from_config(&session, &endpoints, &config.query, &config.pagination);
    let season = config.query.season;
    let weeks = config.query.weeks();
    let positions = &config.query.positions;

    let mut writer = DatasetWriter::new(Path::new(&config.output.directory))?;

    if dataset.includes(Dataset::Stats) {
        let stats = assembler.stats(season, weeks, positions).await?;
        writer.write_positions("stats", &stats)?;
    }

    if dataset.includes(Dataset::Projections) {
        let projections = assembler.projections(season, weeks, positions).await?;
        writer.write_positions("projections", &projections)?;
    }

    if dataset.includes(Dataset::Salaries) {
        let salaries = assembler.salaries(season, weeks).await?;
        writer.write_table("salaries", &salaries)?;
    }

    let manifest = writer.finish(season, weeks, config_hash)?;
    print_summary(&manifest);

    tracing::info!("Scrape completed successfully");
    Ok(())
}
