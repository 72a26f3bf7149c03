//! Preset commands: list curated packages and estimate one of them.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use heritage_core::{
    EstimateRequest, EstimateResult, GuideId, PresetCatalog, PresetId, PresetPackage,
};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::estimate::{EstimatorBuilder, estimate_with};
use crate::loader::{load_catalog, require_existing, write_json};
use crate::{
    ARG_CATALOG, ARG_GUIDE, ARG_PRESET_ID, CliError, ENV_PRESET_CATALOG, ENV_PRESET_ID,
    ENV_PRESETS_CATALOG,
};

/// CLI arguments for the `preset` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "preset",
    long_about = "Expand a curated preset package into a request and \
                 estimate it against the current catalog. The preset's \
                 quoted price is used as the budget, so catalog changes \
                 since the preset was written show up as suggestions.",
    about = "Estimate a preset package"
)]
#[ortho_config(prefix = "HERITAGE")]
pub(crate) struct PresetArgs {
    /// Identifier of the preset to expand.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) preset_id: Option<String>,
    /// Path to the catalog document.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Guide to hire for the trip.
    #[arg(long = ARG_GUIDE, value_name = "id")]
    #[serde(default)]
    pub(crate) guide: Option<String>,
}

impl PresetArgs {
    pub(crate) fn into_config(self) -> Result<PresetConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PresetConfig::try_from(merged)
    }
}

/// Resolved `preset` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PresetConfig {
    pub(crate) preset_id: PresetId,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) guide: Option<GuideId>,
}

impl TryFrom<PresetArgs> for PresetConfig {
    type Error = CliError;

    fn try_from(args: PresetArgs) -> Result<Self, Self::Error> {
        let preset_id = args.preset_id.ok_or(CliError::MissingArgument {
            field: ARG_PRESET_ID,
            env: ENV_PRESET_ID,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_PRESET_CATALOG,
        })?;
        Ok(Self {
            preset_id: preset_id.into(),
            catalog,
            guide: args.guide.map(GuideId::from),
        })
    }
}

/// CLI arguments for the `presets` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "presets", about = "List the preset packages in a catalog")]
#[ortho_config(prefix = "HERITAGE")]
pub(crate) struct PresetsArgs {
    /// Path to the catalog document.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl PresetsArgs {
    fn into_catalog_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_PRESETS_CATALOG,
        })
    }
}

/// Output of the `preset` command.
#[derive(Debug, Serialize)]
pub(crate) struct PresetReport<'a> {
    pub(crate) preset: &'a PresetPackage,
    pub(crate) request: &'a EstimateRequest,
    pub(crate) estimate: &'a EstimateResult,
}

pub(crate) fn run_preset_with(
    args: PresetArgs,
    builder: &dyn EstimatorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let catalog = load_catalog(&config.catalog)?;
    let preset = catalog
        .preset(&config.preset_id)
        .cloned()
        .ok_or_else(|| CliError::UnknownPreset {
            id: config.preset_id.clone(),
        })?;
    let request = preset.to_request(config.guide);
    debug!(
        "expanded preset {} into {} sites over {} days",
        preset.id,
        request.site_ids.len(),
        request.days
    );
    let estimate = estimate_with(builder, catalog, &request)?;
    write_json(
        writer,
        &PresetReport {
            preset: &preset,
            request: &request,
            estimate: &estimate,
        },
    )
}

pub(crate) fn run_presets_with(args: PresetsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_catalog_path()?;
    require_existing(&path, ARG_CATALOG)?;
    let catalog = load_catalog(&path)?;
    write_json(writer, catalog.presets())
}

#[cfg(test)]
pub(crate) fn preset_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PresetConfig, CliError> {
    let merged = PresetArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PresetConfig::try_from(merged)
}
