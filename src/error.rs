//! Errors surfaced by the `jobtester` command-line front end.

use thiserror::Error;

use crate::loader::LoadError;

/// Errors raised while configuring the CLI or producing its report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobTesterError {
    /// No job configuration file was given.
    #[error("job configuration file is required (use --file or -f)")]
    MissingFile,

    /// Configuration could not be loaded or holds an invalid value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The job configuration file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing the report failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
