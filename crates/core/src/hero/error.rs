//! Hero publish flow errors.

use std::path::Path;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors from the hero image publish flow, one variant per failing step.
#[derive(Debug, Error)]
pub enum HeroError {
    /// The local source file does not exist.
    #[error("hero image not found at '{path}'")]
    FileNotFound {
        /// Path that was checked.
        path: String,
    },

    /// The bucket listing call failed.
    #[error("could not reach storage service")]
    Connection(#[source] StorageError),

    /// Creating the hero bucket failed.
    #[error("could not create bucket")]
    BucketCreate(#[source] StorageError),

    /// Uploading the hero image failed.
    #[error("could not upload hero image")]
    Upload(#[source] StorageError),

    /// Reading the local source file failed.
    #[error("could not read '{path}'")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl HeroError {
    pub(crate) fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.display().to_string(),
        }
    }

    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }
}
