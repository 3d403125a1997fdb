//! Command-line interface for the hydrogen site engine.
//!
//! Every command loads a JSON dataset of existing assets, renewable sources
//! and demand centres, runs one engine operation, and prints the result as
//! pretty JSON on stdout. Options layer from CLI flags, `HYDROSITE_*`
//! environment variables and configuration files through `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod logging;
mod recommend;
mod score;
mod sites;
mod summary;

pub use error::CliError;

use recommend::RecommendArgs;
use score::ScoreArgs;
use sites::SitesArgs;
use summary::SummaryArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_CRITERIA: &str = "criteria";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_INVESTMENT_RANGE: &str = "investment-range";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the dataset or the
/// requested operation fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let env_level = std::env::var(logging::ENV_LOG_LEVEL).ok();
    let level = logging::resolve_level(cli.log_level.as_deref(), env_level.as_deref())?;
    logging::init(level)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => score::run_score(args, writer),
        Command::Sites(args) => sites::run_sites(args, writer),
        Command::Recommend(args) => recommend::run_recommend(args, writer),
        Command::Summary(args) => summary::run_summary(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hydrosite",
    about = "Score and rank candidate hydrogen infrastructure sites",
    version
)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, value_name = "level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single location.
    Score(ScoreArgs),
    /// Search a lattice for the best candidate sites.
    Sites(SitesArgs),
    /// Generate investment-filtered recommendations.
    Recommend(RecommendArgs),
    /// Summarise the dataset and its map geometry.
    Summary(SummaryArgs),
}

/// Unwrap a merged option or report which flag and variable can set it.
pub(crate) fn required<T>(
    value: Option<T>,
    field: &'static str,
    env: &'static str,
) -> Result<T, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: serde::Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
