use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::Item;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read item source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse item source {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the full item list from a JSON array file.
///
/// The list is consumed wholesale on every call; there is no incremental
/// update path.
pub fn read_items(path: &Path) -> Result<Vec<Item>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
