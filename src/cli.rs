//! Command-line interface components.

use crate::config::{Config, parse_delimiter};
use crate::constants::{DEFAULT_LOG_LEVEL, QUIET_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use crate::models::BuildingRecord;
use crate::reader::read_buildings_with;
use crate::stats::HousingSummary;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "housing-stats")]
#[command(about = "Classify buildings by floor count and find the least spacious address")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the housing CSV file
    #[arg(value_name = "CSV_PATH")]
    pub input_path: PathBuf,

    /// Field delimiter (single ASCII character, or "tab")
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Keep whitespace around fields instead of trimming it
    #[arg(long)]
    pub no_trim: bool,

    /// Print the category of every building
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build a validated configuration from the arguments
    pub fn to_config(&self) -> crate::error::Result<Config> {
        let mut config = Config::new(self.input_path.clone());
        config.reader.delimiter = parse_delimiter(&self.delimiter)?;
        config.reader.trim = !self.no_trim;
        config.list_buildings = self.list;
        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_LEVEL
        } else if self.quiet {
            QUIET_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("housing_stats={}", args.log_level())));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

/// Read the housing file, compute every statistic and print the report
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config().context("Invalid arguments")?;

    let buildings = read_buildings_with(&config.input_path, &config.reader)
        .with_context(|| format!("Failed to read {}", config.input_path.display()))?;

    let summary = HousingSummary::compute(&buildings).context("Failed to classify buildings")?;
    info!(
        "Classified {} buildings into {} categories",
        summary.building_count(),
        summary.category_counts.len()
    );
    if summary.min_area.is_none() {
        warn!("No building with a positive population; area per resident is undefined");
    }

    write_report(
        &mut io::stdout().lock(),
        &buildings,
        &summary,
        config.list_buildings,
    )
    .context("Failed to write report")?;
    Ok(())
}

/// Write the report printed by [`run`]
pub fn write_report<W: io::Write>(
    out: &mut W,
    buildings: &[BuildingRecord],
    summary: &HousingSummary<'_>,
    list_buildings: bool,
) -> crate::error::Result<()> {
    if list_buildings {
        writeln!(out, "{}", "Buildings:".bright_green().bold())?;
        for (building, category) in buildings.iter().zip(&summary.categories) {
            writeln!(
                out,
                "  {:>4}. {} ({} floors): {}",
                building.row, building.house_address, building.floor_count, category
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "Building categories:".bright_green().bold())?;
    for (category, count) in summary.category_counts.iter() {
        writeln!(out, "  {}: {}", category, count)?;
    }
    writeln!(out, "Total buildings: {}", summary.building_count())?;
    writeln!(out)?;

    write!(
        out,
        "{} ",
        "Lowest residential area per resident:".bright_green().bold()
    )?;
    match &summary.min_area {
        Some(found) => writeln!(
            out,
            "{} ({:.2} per resident)",
            found.house_address, found.ratio
        )?,
        None => writeln!(out, "no building with a positive population")?,
    }

    out.flush()?;
    Ok(())
}
