//! Prow job configuration model.
//!
//! The types mirror the subset of the Prow job schema the checks inspect:
//! presubmits and postsubmits keyed by repository, periodics, the shared
//! [`JobBase`] fields, and the pod spec. Lookup and matching helpers operate
//! on these values read-only.
//!
//! # Example
//!
//! ```
//! use jobtester::job::{JobConfig, find_presubmit_by_name};
//!
//! let config = JobConfig::default();
//! let jobs = config.presubmits_for("kyma-incubator/varkes").unwrap_or_default();
//! assert!(find_presubmit_by_name(jobs, "varkes-app-connector-client").is_none());
//! ```

mod error;
mod lookup;
mod matching;
mod types;

pub use error::PatternError;
pub use lookup::{
    find_job_by_name, find_periodic_by_name, find_postsubmit_by_name, find_presubmit_by_name,
};
pub use matching::{BranchFilter, ChangeMatcher};
pub use types::{
    Brancher, Container, EnvVar, ExtraRef, Job, JobBase, JobConfig, Periodic, PodSpec, Postsubmit,
    Presubmit, SecurityContext, UtilityConfig,
};

#[cfg(test)]
mod tests;
