//! Estimate command implementation for the heritage CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use heritage_core::{
    Catalog, CatalogEstimator, EstimateRequest, EstimateResult, TripDraft, TripDraftError,
    TripEstimator,
};
use log::{debug, info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::loader::{load_catalog, load_request, require_existing, write_json};
use crate::{
    ARG_CATALOG, ARG_ESTIMATE_REQUEST, ARG_SAVE_AS, ARG_TRIPS_DIR, CliError, DEFAULT_TRIPS_DIR,
    ENV_ESTIMATE_CATALOG, ENV_ESTIMATE_REQUEST, MAX_TRIP_SLOTS,
};

/// CLI arguments for the `estimate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "estimate",
    long_about = "Estimate the cost and duration of a trip. The request is a \
                 JSON-encoded EstimateRequest and site and guide ids are \
                 resolved against a catalog document. Paths can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Estimate a trip from a JSON request"
)]
#[ortho_config(prefix = "HERITAGE")]
pub(crate) struct EstimateArgs {
    /// Path to a JSON file containing an EstimateRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the catalog document (`{ sites, guides, presets }`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Save the estimated trip under this name.
    #[arg(long = ARG_SAVE_AS, value_name = "name")]
    #[serde(default)]
    pub(crate) save_as: Option<String>,
    /// Directory receiving saved trips.
    #[arg(long = ARG_TRIPS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) trips_dir: Option<Utf8PathBuf>,
}

impl EstimateArgs {
    pub(crate) fn into_config(self) -> Result<EstimateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EstimateConfig::try_from(merged)
    }
}

/// Resolved `estimate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EstimateConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the catalog document.
    pub(crate) catalog: Utf8PathBuf,
    /// Trimmed trip name when saving was requested.
    pub(crate) save_as: Option<String>,
    /// Directory receiving saved trips.
    pub(crate) trips_dir: Utf8PathBuf,
}

impl EstimateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_ESTIMATE_REQUEST)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }
}

impl TryFrom<EstimateArgs> for EstimateConfig {
    type Error = CliError;

    fn try_from(args: EstimateArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_ESTIMATE_REQUEST,
            env: ENV_ESTIMATE_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_ESTIMATE_CATALOG,
        })?;
        let save_as = args
            .save_as
            .map(|name| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    Err(CliError::InvalidTrip(TripDraftError::BlankName))
                } else {
                    Ok(trimmed.to_owned())
                }
            })
            .transpose()?;
        let trips_dir = args
            .trips_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TRIPS_DIR));
        Ok(Self {
            request_path,
            catalog,
            save_as,
            trips_dir,
        })
    }
}

/// Builds a trip estimator over a loaded catalog.
pub(crate) trait EstimatorBuilder {
    fn build(&self, catalog: Catalog) -> Result<Box<dyn TripEstimator>, CliError>;
}

/// Wraps the catalog in the default-cost-model estimator.
pub(crate) struct DefaultEstimatorBuilder;

impl EstimatorBuilder for DefaultEstimatorBuilder {
    fn build(&self, catalog: Catalog) -> Result<Box<dyn TripEstimator>, CliError> {
        Ok(Box::new(CatalogEstimator::new(catalog)))
    }
}

pub(crate) fn run_estimate_with(
    args: EstimateArgs,
    builder: &dyn EstimatorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_estimate_config(args)?;
    let catalog = load_catalog(&config.catalog)?;
    let request = load_request(&config.request_path)?;
    let result = estimate_with(builder, catalog, &request)?;
    if let Some(name) = &config.save_as {
        save_trip(&config.trips_dir, name, &request, &result)?;
    }
    write_json(writer, &result)
}

fn resolve_estimate_config(args: EstimateArgs) -> Result<EstimateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Estimate `request` with a freshly built estimator and log the outcome.
pub(crate) fn estimate_with(
    builder: &dyn EstimatorBuilder,
    catalog: Catalog,
    request: &EstimateRequest,
) -> Result<EstimateResult, CliError> {
    let estimator = builder.build(catalog)?;
    let result = estimator.estimate(request)?;
    info!(
        "estimated {} sites: total cost {}, total time {} mins",
        result.cost_breakdown.len(),
        result.total_cost,
        result.total_time_mins
    );
    for suggestion in &result.suggestions {
        warn!("{suggestion}");
    }
    Ok(result)
}

/// Persist a named trip as `<trips_dir>/<slug>.json`.
///
/// Saved trips are never replaced: when the slug is taken the trip goes to
/// the first free `<slug>-<n>.json`.
pub(crate) fn save_trip(
    trips_dir: &Utf8Path,
    name: &str,
    request: &EstimateRequest,
    result: &EstimateResult,
) -> Result<Utf8PathBuf, CliError> {
    let draft = TripDraft::new(name, request, result)?;
    let slug = draft.slug();
    let payload = serde_json::to_string_pretty(&draft).map_err(CliError::SerializeOutput)?;
    for slot in 1..=MAX_TRIP_SLOTS {
        let path = trips_dir.join(trip_file_name(&slug, slot));
        match heritage_fs::create_new_utf8_file(&path, payload.as_bytes()) {
            Ok(()) => {
                info!("saved trip {:?} to {path}", draft.name);
                return Ok(path);
            }
            Err(source) if source.kind() == std::io::ErrorKind::AlreadyExists => {
                debug!("{path} is taken");
            }
            Err(source) => return Err(CliError::WriteTrip { path, source }),
        }
    }
    Err(CliError::TripSlotsExhausted {
        dir: trips_dir.to_path_buf(),
        slug,
    })
}

fn trip_file_name(slug: &str, slot: u32) -> String {
    if slot == 1 {
        format!("{slug}.json")
    } else {
        format!("{slug}-{slot}.json")
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EstimateConfig, CliError> {
    let merged = EstimateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EstimateConfig::try_from(merged)
}
