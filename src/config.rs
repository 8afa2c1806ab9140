//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.jobtester.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `JOBTESTER_FILE`, `JOBTESTER_ORG`, ...
//! 4. **Command-line arguments** – `--file`/`-f`, `--changed-file`/`-c`, ...
//!
//! # Configuration File
//!
//! ```toml
//! file = "prow/jobs/incubator/varkes/app-connector-client/app-connector-client.yaml"
//! changed_file = "app-connector-client/index.js"
//! org = "kyma-project"
//! base_ref = "master"
//! format = "text"
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::error::JobTesterError;

/// Report format written by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per job.
    #[default]
    Text,
    /// The loaded configuration as JSON.
    Json,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `JOBTESTER_FILE` or `--file`: Job configuration file to load
/// - `JOBTESTER_CHANGED_FILE` or `--changed-file`: Changed path to evaluate
/// - `JOBTESTER_ORG` or `--org`: Organisation owning the extra references
/// - `JOBTESTER_BASE_REF` or `--base-ref`: Branch extra references track
/// - `JOBTESTER_FORMAT` or `--format`: `text` or `json`
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "JOBTESTER",
    discovery(
        dotfile_name = ".jobtester.toml",
        config_file_name = "jobtester.toml",
        app_name = "jobtester"
    )
)]
pub struct JobTesterConfig {
    /// Job configuration file to load.
    #[ortho_config(cli_short = 'f')]
    pub file: Option<String>,

    /// Changed path evaluated against every presubmit's `run_if_changed`.
    #[ortho_config(cli_short = 'c')]
    pub changed_file: Option<String>,

    /// Organisation owning the extra references (default `kyma-project`).
    pub org: Option<String>,

    /// Branch the extra references must track (default `master`).
    pub base_ref: Option<String>,

    /// Report format: `text` (default) or `json`.
    pub format: Option<String>,
}

impl JobTesterConfig {
    /// Returns the job configuration file or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`JobTesterError::MissingFile`] when no file is configured.
    pub fn require_file(&self) -> Result<&Utf8Path, JobTesterError> {
        self.file
            .as_deref()
            .map(Utf8Path::new)
            .ok_or(JobTesterError::MissingFile)
    }

    /// Builds the project catalog, applying organisation and base ref
    /// overrides.
    #[must_use]
    pub fn catalog(&self) -> ProjectCatalog {
        let defaults = ProjectCatalog::default();
        ProjectCatalog::new(
            self.org.as_deref().unwrap_or_else(|| defaults.org()),
            self.base_ref
                .as_deref()
                .unwrap_or_else(|| defaults.base_ref()),
        )
    }

    /// Parses the configured report format.
    ///
    /// # Errors
    ///
    /// Returns [`JobTesterError::Configuration`] for anything other than
    /// `text` or `json`.
    pub fn output_format(&self) -> Result<OutputFormat, JobTesterError> {
        match self.format.as_deref() {
            None | Some("text") => Ok(OutputFormat::Text),
            Some("json") => Ok(OutputFormat::Json),
            Some(other) => Err(JobTesterError::Configuration {
                message: format!("unknown output format '{other}' (expected text or json)"),
            }),
        }
    }
}
