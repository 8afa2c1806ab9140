//! CLI report handling.
//!
//! Loads the configured job file and writes a report in the requested
//! format. Formatting lives in [`output`].

use std::io::Write;

use jobtester::loader::read_job_config;
use jobtester::{JobTesterConfig, JobTesterError, OutputFormat};

pub mod output;

use output::{Report, write_json_report, write_text_report};

/// Loads the job file named by `config` and writes its report to `writer`.
pub fn run_report<W: Write>(config: &JobTesterConfig, writer: &mut W) -> Result<(), JobTesterError> {
    let path = config.require_file()?;
    let format = config.output_format()?;
    let job_config = read_job_config(path)?;

    match format {
        OutputFormat::Text => {
            let catalog = config.catalog();
            let report = Report {
                path,
                config: &job_config,
                catalog: &catalog,
                changed_file: config.changed_file.as_deref(),
            };
            write_text_report(writer, &report)
        }
        OutputFormat::Json => write_json_report(writer, &job_config),
    }
}
