//! File-backed collaborators: quest catalog seed loading and profile
//! directory scanning.
//!
//! Profile scanning is deliberately re-run in full for every aggregation
//! request; there is no cache to invalidate and no incremental path.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::catalog::{Quest, QuestCatalog};
use crate::errors::{CatalogError, QuestBoardError};
use crate::profile::ProfileRecord;

/// Load the quest catalog from a JSON seed file.
///
/// Any failure to read or decode the file is a hard `CatalogError`; the
/// catalog is the one input the pipeline cannot degrade around.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<QuestCatalog, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::Unavailable {
        reason: format!("{}: {}", path.display(), e),
    })?;

    let quests: Vec<Quest> =
        serde_json::from_str(&contents).map_err(|e| CatalogError::Unavailable {
            reason: format!("{}: {}", path.display(), e),
        })?;

    let catalog = QuestCatalog::new(quests)?;
    info!(
        "loaded quest catalog from {} ({} quests)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Scan a directory for `*.json` profile files and parse each one.
///
/// Files are visited in name order so the resulting sequence (and with it
/// the status table's row order) is stable across runs. Unreadable or
/// malformed files are skipped with a warning; one bad profile never
/// aborts the batch.
pub fn scan_profiles<P: AsRef<Path>>(dir: P) -> Result<Vec<ProfileRecord>, QuestBoardError> {
    let dir = dir.as_ref();
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("skipping unreadable profile {}: {}", path.display(), e);
                continue;
            }
        };
        match ProfileRecord::from_json(&contents) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("skipping profile {}: {}", path.display(), e);
            }
        }
    }

    info!("scanned {} profile record(s) from {}", records.len(), dir.display());
    Ok(records)
}
