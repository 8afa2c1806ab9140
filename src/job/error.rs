//! Error types for job pattern compilation.

use thiserror::Error;

/// A job carries a regular expression that does not compile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid pattern '{pattern}' in job '{job}': {message}")]
pub struct PatternError {
    /// Name of the job holding the pattern.
    pub job: String,
    /// The pattern as written in the configuration.
    pub pattern: String,
    /// Error detail from the regex engine.
    pub message: String,
}

impl PatternError {
    pub(crate) fn new(job: &str, pattern: &str, error: &regex::Error) -> Self {
        Self {
            job: job.to_owned(),
            pattern: pattern.to_owned(),
            message: error.to_string(),
        }
    }
}
