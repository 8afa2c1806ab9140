//! Validation helpers for Prow CI job definitions.
//!
//! The library loads job configuration YAML into a typed model, looks jobs up
//! by name, and asserts on their structure: extra references, preset labels,
//! `run_if_changed` patterns, and build commands. Per-job tests combine these
//! pieces against fixture files; the `jobtester` binary prints a summary of
//! one file.

pub mod catalog;
pub mod config;
pub mod error;
pub mod job;
pub mod loader;
pub mod schema;
pub mod tester;

pub use catalog::{Preset, ProjectCatalog};
pub use config::{JobTesterConfig, OutputFormat};
pub use error::JobTesterError;
pub use job::JobConfig;
pub use loader::{LoadError, read_job_config};
pub use tester::{JobAssertions, JobCheckError};
