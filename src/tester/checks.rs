//! Structural checks over a loaded job.
//!
//! Each check inspects one fragment of a job read-only and returns the
//! expectation it found unmet. [`JobAssertions`](super::JobAssertions) turns
//! these results into test failures.

use crate::catalog::{Preset, ProjectCatalog};
use crate::job::{ExtraRef, JobBase, Presubmit, UtilityConfig};
use crate::schema::JobSchema;

use super::error::JobCheckError;

fn is_project_ref(extra_ref: &ExtraRef, catalog: &ProjectCatalog, repository: &str) -> bool {
    extra_ref.path_alias == catalog.path_alias_for(repository)
        && extra_ref.org == catalog.org()
        && extra_ref.repo == repository
        && extra_ref.base_ref == catalog.base_ref()
}

/// Checks that `config` checks out `repository` from the catalog's
/// organisation at the catalog's base ref.
///
/// # Errors
///
/// Returns [`JobCheckError::MissingExtraRef`] when no extra reference
/// matches on path alias, organisation, repository, and base ref.
pub fn check_extra_ref(
    config: &UtilityConfig,
    catalog: &ProjectCatalog,
    repository: &str,
) -> Result<(), JobCheckError> {
    tracing::trace!("checking extra ref '{repository}'");
    if config
        .extra_refs
        .iter()
        .any(|extra_ref| is_project_ref(extra_ref, catalog, repository))
    {
        return Ok(());
    }
    Err(JobCheckError::MissingExtraRef {
        repository: repository.to_owned(),
    })
}

/// Checks that `config` checks out the catalog's test-infra repository.
///
/// # Errors
///
/// Returns [`JobCheckError::MissingExtraRef`] when the reference is absent.
pub fn check_extra_ref_test_infra(
    config: &UtilityConfig,
    catalog: &ProjectCatalog,
) -> Result<(), JobCheckError> {
    check_extra_ref(config, catalog, catalog.test_infra_repo())
}

/// Checks that `config` checks out every repository in `repositories`.
///
/// # Errors
///
/// Returns [`JobCheckError::MissingExtraRef`] for the first repository
/// without a matching extra reference.
pub fn check_extra_refs<S: AsRef<str>>(
    config: &UtilityConfig,
    catalog: &ProjectCatalog,
    repositories: &[S],
) -> Result<(), JobCheckError> {
    repositories
        .iter()
        .try_for_each(|repository| check_extra_ref(config, catalog, repository.as_ref()))
}

/// Checks that every preset in `expected` is enabled on `job`.
///
/// All presets are inspected; one failure is returned per missing preset.
#[must_use]
pub fn check_presets(job: &JobBase, expected: &[Preset]) -> Vec<JobCheckError> {
    expected
        .iter()
        .filter(|preset| !job.has_preset(**preset))
        .map(|preset| {
            tracing::trace!("job '{}' lacks preset '{preset}'", job.name);
            JobCheckError::MissingPreset {
                preset: *preset,
                actual: job.labels.get(preset.label()).cloned(),
            }
        })
        .collect()
}

/// Checks that `job` runs when only `changed_file` changes.
///
/// # Errors
///
/// Returns [`JobCheckError::ChangeEvaluation`] when the job's pattern cannot
/// be compiled, and [`JobCheckError::MissedChange`] when it does not match.
pub fn check_run_if_changed(
    schema: &dyn JobSchema,
    job: &Presubmit,
    changed_file: &str,
) -> Result<(), JobCheckError> {
    let changes = [changed_file.to_owned()];
    let runs = schema
        .runs_against_changes(job, &changes)
        .map_err(|error| JobCheckError::ChangeEvaluation {
            message: error.to_string(),
        })?;
    if runs {
        Ok(())
    } else {
        Err(JobCheckError::MissedChange {
            changed_file: changed_file.to_owned(),
        })
    }
}

/// Checks that `command` runs the catalog's build script and nothing else.
///
/// # Errors
///
/// Returns [`JobCheckError::UnexpectedCommand`] on any difference.
pub fn check_command(command: &[String], catalog: &ProjectCatalog) -> Result<(), JobCheckError> {
    let expected = vec![catalog.build_script()];
    if command == expected.as_slice() {
        Ok(())
    } else {
        Err(JobCheckError::UnexpectedCommand {
            expected,
            actual: command.to_vec(),
        })
    }
}
