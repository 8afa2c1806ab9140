//! `jobtester` CLI entrypoint: load a Prow job file and summarise its jobs.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use jobtester::{JobTesterConfig, JobTesterError};
use ortho_config::OrthoConfig;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), JobTesterError> {
    let config = load_config()?;
    let mut stdout = io::stdout().lock();
    cli::run_report(&config, &mut stdout)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`JobTesterError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<JobTesterConfig, JobTesterError> {
    JobTesterConfig::load().map_err(|error| JobTesterError::Configuration {
        message: error.to_string(),
    })
}
