//! Input discovery, JSON decoding and output encoding shared by commands.

use std::io::Write;

use camino::Utf8Path;
use heritage_core::{Catalog, CatalogDocument, EstimateRequest};
use heritage_fs::read_utf8_file;
use log::{debug, info};
use serde::{Serialize, de::DeserializeOwned};

use crate::{ARG_CATALOG, ARG_ESTIMATE_REQUEST, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match heritage_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let contents = read_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load and index a catalog document.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let document: CatalogDocument = load_json(path, ARG_CATALOG)?;
    let catalog = Catalog::try_from(document).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded catalog {path} with {} sites and {} guides",
        catalog.site_count(),
        catalog.guide_count()
    );
    Ok(catalog)
}

/// Load a JSON-encoded [`EstimateRequest`] from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<EstimateRequest, CliError> {
    let request: EstimateRequest = load_json(path, ARG_ESTIMATE_REQUEST)?;
    debug!(
        "request {path}: {} sites over {} days",
        request.site_ids.len(),
        request.days
    );
    Ok(request)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
