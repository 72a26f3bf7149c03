//! Command-line interface for the heritage trip estimation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod estimate;
mod loader;
mod preset;

pub use error::CliError;
use estimate::{DefaultEstimatorBuilder, EstimateArgs, run_estimate_with};
use preset::{PresetArgs, PresetsArgs, run_preset_with, run_presets_with};

const ARG_ESTIMATE_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_SAVE_AS: &str = "save-as";
const ARG_TRIPS_DIR: &str = "trips-dir";
const ARG_PRESET_ID: &str = "preset";
const ARG_GUIDE: &str = "guide";
const ENV_ESTIMATE_REQUEST: &str = "HERITAGE_CMDS_ESTIMATE_REQUEST_PATH";
const ENV_ESTIMATE_CATALOG: &str = "HERITAGE_CMDS_ESTIMATE_CATALOG";
const ENV_PRESET_ID: &str = "HERITAGE_CMDS_PRESET_PRESET_ID";
const ENV_PRESET_CATALOG: &str = "HERITAGE_CMDS_PRESET_CATALOG";
const ENV_PRESETS_CATALOG: &str = "HERITAGE_CMDS_PRESETS_CATALOG";
const DEFAULT_TRIPS_DIR: &str = "trips";
const MAX_TRIP_SLOTS: u32 = 999;

/// Run the heritage CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or the
/// estimate itself are invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultEstimatorBuilder;
    match cli.command {
        Command::Estimate(args) => run_estimate_with(args, &builder, &mut stdout),
        Command::Preset(args) => run_preset_with(args, &builder, &mut stdout),
        Command::Presets(args) => run_presets_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "heritage",
    about = "Cost, time and feasibility estimates for heritage trips",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate a trip described by a JSON request.
    Estimate(EstimateArgs),
    /// Expand and estimate a curated preset package.
    Preset(PresetArgs),
    /// List the preset packages in a catalog.
    Presets(PresetsArgs),
}

#[cfg(test)]
mod tests;
