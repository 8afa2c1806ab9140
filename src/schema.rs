//! Narrow seam over the external job configuration schema.
//!
//! The loader and the assertion helpers only need two things from the
//! scheduler's schema: turning bytes into a [`JobConfig`] and deciding
//! whether a presubmit runs against a set of changed files. Keeping both
//! behind [`JobSchema`] confines upstream schema churn to [`ProwSchema`].

use std::fmt::Debug;

use thiserror::Error;

use crate::job::{JobConfig, PatternError, Presubmit};

/// Errors raised by a [`JobSchema`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The document is not valid YAML or does not fit the job model.
    #[error("invalid job configuration: {message}")]
    Yaml {
        /// Error detail from the YAML parser.
        message: String,
    },

    /// A job pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: error.to_string(),
        }
    }
}

/// Operations the validation core needs from the job schema.
#[cfg_attr(test, mockall::automock)]
pub trait JobSchema: Send + Sync + Debug {
    /// Parses a job configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Yaml`] on syntax or shape errors.
    fn parse_job_config(&self, bytes: &[u8]) -> Result<JobConfig, SchemaError>;

    /// Returns `true` when `presubmit` runs against `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Pattern`] when the job's change pattern does
    /// not compile.
    fn runs_against_changes(
        &self,
        presubmit: &Presubmit,
        changes: &[String],
    ) -> Result<bool, SchemaError>;
}

/// [`JobSchema`] for Prow job files.
///
/// YAML merge keys (`<<: *anchor`) are expanded before the document is
/// mapped onto the typed model. A blank file or a `null` document yields an
/// empty configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProwSchema;

impl JobSchema for ProwSchema {
    fn parse_job_config(&self, bytes: &[u8]) -> Result<JobConfig, SchemaError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JobConfig::default());
        }
        let mut document: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
        if document.is_null() {
            return Ok(JobConfig::default());
        }
        document.apply_merge()?;
        Ok(serde_yaml::from_value(document)?)
    }

    fn runs_against_changes(
        &self,
        presubmit: &Presubmit,
        changes: &[String],
    ) -> Result<bool, SchemaError> {
        Ok(presubmit.runs_against_changes(changes)?)
    }
}
