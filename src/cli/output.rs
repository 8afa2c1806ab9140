//! Report formatting for the `jobtester` CLI.

use std::io::Write;

use camino::Utf8Path;
use jobtester::catalog::ProjectCatalog;
use jobtester::job::{Brancher, JobBase, JobConfig, Presubmit};
use jobtester::tester::check_extra_ref_test_infra;
use jobtester::JobTesterError;

/// What the text report describes.
pub struct Report<'a> {
    /// File the configuration was loaded from.
    pub path: &'a Utf8Path,
    /// The loaded configuration.
    pub config: &'a JobConfig,
    /// Catalog the extra references are compared against.
    pub catalog: &'a ProjectCatalog,
    /// Changed path evaluated against each presubmit.
    pub changed_file: Option<&'a str>,
}

/// Writes one line per job, grouped by trigger type and repository.
pub fn write_text_report<W: Write>(
    writer: &mut W,
    report: &Report<'_>,
) -> Result<(), JobTesterError> {
    writeln!(writer, "Loaded job configuration from {}", report.path).map_err(|e| io_error(&e))?;

    writeln!(writer, "Presubmits:").map_err(|e| io_error(&e))?;
    write_none_if_empty(writer, report.config.presubmits.is_empty())?;
    for (repository, jobs) in &report.config.presubmits {
        writeln!(writer, "  {repository}:").map_err(|e| io_error(&e))?;
        for job in jobs {
            let mut line = job_line(
                &job.job_base,
                &job.brancher,
                job.run_if_changed.as_deref(),
                report.catalog,
            );
            if let Some(changed_file) = report.changed_file {
                line.push_str(&format!(" triggered={}", triggered(job, changed_file)));
            }
            writeln!(writer, "    {line}").map_err(|e| io_error(&e))?;
        }
    }

    writeln!(writer, "Postsubmits:").map_err(|e| io_error(&e))?;
    write_none_if_empty(writer, report.config.postsubmits.is_empty())?;
    for (repository, jobs) in &report.config.postsubmits {
        writeln!(writer, "  {repository}:").map_err(|e| io_error(&e))?;
        for job in jobs {
            let line = job_line(
                &job.job_base,
                &job.brancher,
                job.run_if_changed.as_deref(),
                report.catalog,
            );
            writeln!(writer, "    {line}").map_err(|e| io_error(&e))?;
        }
    }

    writeln!(writer, "Periodics:").map_err(|e| io_error(&e))?;
    write_none_if_empty(writer, report.config.periodics.is_empty())?;
    for job in &report.config.periodics {
        let schedule = if job.cron.is_empty() {
            format!("interval={}", job.interval)
        } else {
            format!("cron={}", job.cron)
        };
        writeln!(
            writer,
            "    {} {schedule} test-infra={}",
            job.job_base.name,
            test_infra_status(&job.job_base, report.catalog)
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes the loaded configuration as pretty-printed JSON.
pub fn write_json_report<W: Write>(
    writer: &mut W,
    config: &JobConfig,
) -> Result<(), JobTesterError> {
    serde_json::to_writer_pretty(&mut *writer, config).map_err(|error| JobTesterError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn job_line(
    job: &JobBase,
    brancher: &Brancher,
    run_if_changed: Option<&str>,
    catalog: &ProjectCatalog,
) -> String {
    format!(
        "{} branches=[{}] run_if_changed={} test-infra={}",
        job.name,
        brancher.branches.join(","),
        run_if_changed.unwrap_or("-"),
        test_infra_status(job, catalog)
    )
}

fn test_infra_status(job: &JobBase, catalog: &ProjectCatalog) -> &'static str {
    if check_extra_ref_test_infra(&job.utility_config, catalog).is_ok() {
        "ok"
    } else {
        "missing"
    }
}

fn triggered(job: &Presubmit, changed_file: &str) -> &'static str {
    match job.runs_against_changes(&[changed_file]) {
        Ok(true) => "yes",
        Ok(false) => "no",
        Err(error) => {
            tracing::warn!(
                "cannot evaluate run_if_changed of '{}': {error}",
                job.job_base.name
            );
            "error"
        }
    }
}

fn write_none_if_empty<W: Write>(writer: &mut W, is_empty: bool) -> Result<(), JobTesterError> {
    if is_empty {
        writeln!(writer, "  (none)").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn io_error(error: &std::io::Error) -> JobTesterError {
    JobTesterError::Io {
        message: error.to_string(),
    }
}
