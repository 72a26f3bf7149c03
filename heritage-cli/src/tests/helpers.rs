//! Test helpers for laying out catalogs and requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use heritage_core::EstimateRequest;
use tempfile::TempDir;

/// The Chambal sample catalog shipped with the CLI tests.
pub(super) const CHAMBAL_CATALOG: &str = include_str!("../../tests/fixtures/chambal_catalog.json");

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Create a temporary UTF-8 workspace; keep the `TempDir` alive for its
/// lifetime.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_chambal_catalog(root: &Utf8Path) -> Utf8PathBuf {
    let path = root.join("catalog.json");
    write_utf8(&path, CHAMBAL_CATALOG.as_bytes());
    path
}

pub(super) fn write_request(path: &Utf8Path, request: &EstimateRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}
