//! Error types for the wordfinder dictionary layer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the text of a word source.
///
/// These never reach search callers: the dictionary cache logs them and
/// degrades to an empty word list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The word source does not exist where the resolver looked for it
    #[error("Dictionary file not found: {path}")]
    NotFound { path: PathBuf },

    /// The word source exists but could not be read
    #[error("Failed to read dictionary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
