use crate::error::BrainsightError;
use crate::models::ResultSet;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "brainsightai_results.json";

/// Pretty-printed JSON (two-space indent), keys in result-set order.
pub fn to_export_json(results: &ResultSet) -> Result<String, BrainsightError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes `brainsightai_results.json` into `dir`. Does nothing and returns
/// `Ok(None)` when there are no results yet.
pub fn export_results(
    results: Option<&ResultSet>,
    dir: &Path,
) -> Result<Option<PathBuf>, BrainsightError> {
    let results = match results {
        Some(results) => results,
        None => {
            tracing::debug!("export skipped: no results available");
            return Ok(None);
        }
    };

    let json = to_export_json(results)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, json)?;

    tracing::info!(path = %path.display(), models = results.len(), "results exported");
    Ok(Some(path))
}
