//! Failures reported by the job checks.

use thiserror::Error;

use crate::catalog::Preset;

/// A job configuration did not meet an expectation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobCheckError {
    /// No extra reference matches the repository.
    #[error("job has not configured {repository} as an extra ref")]
    MissingExtraRef {
        /// Repository that should be checked out.
        repository: String,
    },

    /// A preset label is absent or not set to `"true"`.
    #[error("missing preset [{preset}]")]
    MissingPreset {
        /// The expected preset.
        preset: Preset,
        /// Value the label actually holds, if any.
        actual: Option<String>,
    },

    /// The job does not run against the changed file.
    #[error("missed change [{changed_file}]")]
    MissedChange {
        /// Changed file the job should react to.
        changed_file: String,
    },

    /// The job's change pattern could not be evaluated.
    #[error("cannot evaluate run_if_changed: {message}")]
    ChangeEvaluation {
        /// Error detail from the schema.
        message: String,
    },

    /// The container command is not the standard build script.
    #[error("unexpected command: expected {expected:?}, got {actual:?}")]
    UnexpectedCommand {
        /// Command the job should run.
        expected: Vec<String>,
        /// Command the job runs.
        actual: Vec<String>,
    },
}

impl JobCheckError {
    /// Returns `true` for failures that make further checks meaningless.
    ///
    /// A job lacking a required checkout, or one whose patterns do not
    /// compile, would only produce misleading follow-up failures.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingExtraRef { .. } | Self::ChangeEvaluation { .. }
        )
    }
}
