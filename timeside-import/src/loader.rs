//! Batch file loading
//!
//! A batch file is a JSON array of records:
//!
//! ```json
//! [{"title": "...", "url": "...", "name": "...", "albumTitle": "..."}]
//! ```
//!
//! Local media paths in `url` are relative to the batch file's directory.

use std::path::{Path, PathBuf};
use timeside_core::domain::record::InputRecord;
use tracing::debug;

use crate::error::{ImportError, Result};

/// Records of one import run
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub records: Vec<InputRecord>,
    /// Directory local media paths are resolved against
    pub base_dir: PathBuf,
}

impl Batch {
    pub fn new(records: Vec<InputRecord>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            records,
            base_dir: base_dir.into(),
        }
    }
}

/// Reads a batch file
///
/// Relative paths are taken from the current directory.
pub async fn load_batch(path: &Path) -> Result<Batch> {
    let load_error = |reason: String| ImportError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| load_error(e.to_string()))?
            .join(path)
    };

    let content = tokio::fs::read_to_string(&absolute)
        .await
        .map_err(|e| load_error(e.to_string()))?;
    let records: Vec<InputRecord> =
        serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))?;

    let base_dir = absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    debug!(path = %absolute.display(), records = records.len(), "Loaded batch file");
    Ok(Batch { records, base_dir })
}
