//! Name-based lookup over per-repository job lists.

use super::types::{Job, Periodic, Postsubmit, Presubmit};

/// Returns the first job in `jobs` named `name`.
#[must_use]
pub fn find_job_by_name<'a, J: Job>(jobs: &'a [J], name: &str) -> Option<&'a J> {
    jobs.iter().find(|job| job.name() == name)
}

/// Finds a presubmit job by name.
#[must_use]
pub fn find_presubmit_by_name<'a>(jobs: &'a [Presubmit], name: &str) -> Option<&'a Presubmit> {
    find_job_by_name(jobs, name)
}

/// Finds a postsubmit job by name.
#[must_use]
pub fn find_postsubmit_by_name<'a>(jobs: &'a [Postsubmit], name: &str) -> Option<&'a Postsubmit> {
    find_job_by_name(jobs, name)
}

/// Finds a periodic job by name.
#[must_use]
pub fn find_periodic_by_name<'a>(jobs: &'a [Periodic], name: &str) -> Option<&'a Periodic> {
    find_job_by_name(jobs, name)
}
