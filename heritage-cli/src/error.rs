//! Error types emitted by the heritage CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use heritage_core::{CatalogError, EstimateError, PresetId, TripDraftError};
use thiserror::Error;

/// Errors emitted by the heritage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading a JSON input failed.
    #[error("failed to read {field} at {path:?}: {source}")]
    OpenInput {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A JSON input could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog document contains conflicting records.
    #[error("catalog at {path:?} is inconsistent: {source}")]
    InvalidCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Conflict found while indexing the catalog.
        #[source]
        source: CatalogError,
    },
    /// The requested preset is absent from the catalog.
    #[error("preset {id} not found in catalog")]
    UnknownPreset {
        /// Requested preset identifier.
        id: PresetId,
    },
    /// The engine rejected the request.
    #[error("estimate failed: {0}")]
    Estimate(#[from] EstimateError),
    /// The trip could not be drafted for saving.
    #[error("cannot save trip: {0}")]
    InvalidTrip(#[from] TripDraftError),
    /// Writing a saved trip failed.
    #[error("failed to write trip to {path:?}: {source}")]
    WriteTrip {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Every file name available to a trip slug is taken.
    #[error("no free file name for trip {slug:?} in {dir:?}")]
    TripSlotsExhausted {
        /// Directory receiving saved trips.
        dir: Utf8PathBuf,
        /// Slug of the trip being saved.
        slug: String,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
