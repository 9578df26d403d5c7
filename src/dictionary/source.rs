//! Word sources
//!
//! A word source resolves a dictionary name to its raw text, one word per
//! line. The trait keeps the storage medium opaque to the cache; tests
//! substitute in-memory sources.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::dictionary::DictionaryName;
use crate::error::SourceError;

/// Loads the raw text of a dictionary by name
pub trait WordSource: Send + Sync {
    fn load(&self, name: DictionaryName) -> Result<String, SourceError>;
}

/// Word source backed by plain text files in a dictionary directory
pub struct FileWordSource {
    dict_dir: PathBuf,
}

impl FileWordSource {
    /// Create a file source over the default dictionary directory
    pub fn new() -> Self {
        Self {
            dict_dir: default_dict_dir(),
        }
    }

    /// Create a file source over a specific directory
    pub fn with_dir(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
        }
    }
}

impl Default for FileWordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for FileWordSource {
    fn load(&self, name: DictionaryName) -> Result<String, SourceError> {
        let path = self.dict_dir.join(format!("{}.txt", name.file_stem()));
        debug!("Reading word source {}", path.display());

        fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound { path }
            } else {
                SourceError::Read { path, source: err }
            }
        })
    }
}

/// Resolve the dictionary directory: explicit override via environment,
/// then a `dicts` directory next to the working directory, then the
/// per-user data directory
fn default_dict_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("WORDFINDER_DICT_DIR") {
        return PathBuf::from(dir);
    }

    let local = PathBuf::from("dicts");
    if local.is_dir() {
        return local;
    }

    if let Some(data) = dirs::data_dir() {
        return data.join("wordfinder").join("dicts");
    }

    local
}
