//! Test-failure channel for the job checks.

use std::fmt::Write as _;
use std::thread;

use crate::catalog::{Preset, ProjectCatalog};
use crate::job::{JobBase, Presubmit, UtilityConfig};
use crate::schema::{JobSchema, ProwSchema};

use super::checks::{
    check_command, check_extra_ref, check_extra_ref_test_infra, check_extra_refs, check_presets,
    check_run_if_changed,
};
use super::error::JobCheckError;

/// Records job check failures for the enclosing test.
///
/// Fatal failures (see [`JobCheckError::is_fatal`]) panic immediately.
/// Other failures are collected and the test fails when the recorder is
/// dropped, so one run reports every missing preset at once.
///
/// # Example
///
/// ```no_run
/// use camino::Utf8Path;
/// use jobtester::catalog::Preset;
/// use jobtester::loader::read_job_config;
/// use jobtester::tester::JobAssertions;
///
/// let config = read_job_config(Utf8Path::new("jobs.yaml")).expect("should load");
/// let job = config
///     .presubmits_for("kyma-incubator/varkes")
///     .and_then(|jobs| jobs.first())
///     .expect("presubmit should exist");
///
/// let mut assertions = JobAssertions::new();
/// assertions.has_extra_ref_test_infra(&job.job_base.utility_config);
/// assertions.has_presets(&job.job_base, &[Preset::DindEnabled, Preset::BuildPr]);
/// ```
#[derive(Debug)]
pub struct JobAssertions {
    catalog: ProjectCatalog,
    schema: Box<dyn JobSchema>,
    failures: Vec<JobCheckError>,
}

impl Default for JobAssertions {
    fn default() -> Self {
        Self::new()
    }
}

impl JobAssertions {
    /// Creates a recorder using the default catalog and the Prow schema.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(ProjectCatalog::default())
    }

    /// Creates a recorder comparing against `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            schema: Box::new(ProwSchema),
            failures: Vec::new(),
        }
    }

    /// Replaces the schema used to evaluate change patterns.
    #[must_use]
    pub fn with_schema(mut self, schema: Box<dyn JobSchema>) -> Self {
        self.schema = schema;
        self
    }

    /// Asserts that `config` checks out `repository`.
    ///
    /// # Panics
    ///
    /// Panics immediately when the extra reference is missing.
    pub fn has_extra_ref(&mut self, config: &UtilityConfig, repository: &str) {
        let result = check_extra_ref(config, &self.catalog, repository);
        self.record(result);
    }

    /// Asserts that `config` checks out the test-infra repository.
    ///
    /// # Panics
    ///
    /// Panics immediately when the extra reference is missing.
    pub fn has_extra_ref_test_infra(&mut self, config: &UtilityConfig) {
        let result = check_extra_ref_test_infra(config, &self.catalog);
        self.record(result);
    }

    /// Asserts that `config` checks out every repository listed.
    ///
    /// # Panics
    ///
    /// Panics immediately on the first repository without an extra reference.
    pub fn has_extra_refs<S: AsRef<str>>(&mut self, config: &UtilityConfig, repositories: &[S]) {
        let result = check_extra_refs(config, &self.catalog, repositories);
        self.record(result);
    }

    /// Asserts that every preset in `expected` is enabled on `job`.
    ///
    /// Each missing preset is recorded separately.
    pub fn has_presets(&mut self, job: &JobBase, expected: &[Preset]) {
        self.failures.extend(check_presets(job, expected));
    }

    /// Asserts that `job` runs when `changed_file` changes.
    ///
    /// # Panics
    ///
    /// Panics immediately when the job's change pattern cannot be compiled.
    pub fn runs_if_changed(&mut self, job: &Presubmit, changed_file: &str) {
        let result = check_run_if_changed(self.schema.as_ref(), job, changed_file);
        self.record(result);
    }

    /// Asserts that `command` runs the standard build script.
    pub fn has_command(&mut self, command: &[String]) {
        let result = check_command(command, &self.catalog);
        self.record(result);
    }

    /// Returns the failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> &[JobCheckError] {
        &self.failures
    }

    /// Takes the recorded failures, leaving the recorder clean.
    ///
    /// Dropping the recorder afterwards no longer fails the test.
    #[must_use]
    pub fn into_failures(mut self) -> Vec<JobCheckError> {
        std::mem::take(&mut self.failures)
    }

    fn record(&mut self, result: Result<(), JobCheckError>) {
        let Err(error) = result else {
            return;
        };
        if error.is_fatal() {
            panic!("{error}");
        }
        self.failures.push(error);
    }
}

impl Drop for JobAssertions {
    fn drop(&mut self) {
        if self.failures.is_empty() || thread::panicking() {
            return;
        }
        let mut message = String::from("job assertions failed:");
        for failure in &self.failures {
            let _ignored = write!(message, "\n  - {failure}");
        }
        panic!("{message}");
    }
}
