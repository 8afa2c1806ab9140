//! Error types for job configuration loading.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure to turn a job configuration file into a
/// [`JobConfig`](crate::job::JobConfig).
///
/// Each variant names the phase that failed and the file involved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The file or its directory could not be opened.
    #[error("while opening file [{path}]: {message}")]
    Open {
        /// File being loaded.
        path: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The file was opened but its content could not be read.
    #[error("while reading file [{path}]: {message}")]
    Read {
        /// File being loaded.
        path: Utf8PathBuf,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The content is not a valid job configuration.
    #[error("while unmarshalling file [{path}]: {message}")]
    Unmarshal {
        /// File being loaded.
        path: Utf8PathBuf,
        /// Error detail from the schema.
        message: String,
    },
}

impl LoadError {
    /// Returns the path of the file that failed to load.
    #[must_use]
    pub const fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } | Self::Unmarshal { path, .. } => {
                path
            }
        }
    }
}
