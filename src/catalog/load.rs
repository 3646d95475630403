//! Catalog loading functionality

use super::{Archive, FilmRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Fatal conditions; the skill cannot operate without its catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file {path} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog file {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads the film catalog from a JSON file whose top-level values are film
/// records, keeping only records with playable streams.
///
/// Non-fatal problems (stream-less records, duplicate primary streams) are
/// logged and the archive still loads; an unreadable or malformed file is
/// fatal.
pub fn load_archive<P: AsRef<Path>>(path: P) -> Result<Archive, CatalogError> {
    let path = path.as_ref();
    let file_text = std::fs::read_to_string(path).map_err(|source| CatalogError::Unavailable {
        path: path.to_owned(),
        source,
    })?;
    let records: BTreeMap<String, FilmRecord> =
        serde_json::from_str(&file_text).map_err(|source| CatalogError::Malformed {
            path: path.to_owned(),
            source,
        })?;

    let build_result = Archive::build(records.into_values());
    let problems = build_result.problems;
    let archive = build_result.archive;

    if !problems.is_empty() {
        warn!("Found {} problems in {}:", problems.len(), path.display());
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }
    info!("Catalog has {} playable films.", archive.len());

    Ok(archive)
}
