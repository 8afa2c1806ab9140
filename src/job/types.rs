//! Typed model of a Prow job configuration file.
//!
//! Prow field names are `snake_case`; the embedded Kubernetes pod fields are
//! `camelCase`. Keys the model does not know about are ignored so that YAML
//! anchor holders such as `job_template` do not break parsing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Preset;

/// Root of a job configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Presubmit jobs keyed by `org/repo`.
    pub presubmits: BTreeMap<String, Vec<Presubmit>>,
    /// Postsubmit jobs keyed by `org/repo`.
    pub postsubmits: BTreeMap<String, Vec<Postsubmit>>,
    /// Periodic jobs. Prow does not key these by repository.
    pub periodics: Vec<Periodic>,
}

impl JobConfig {
    /// Returns the presubmits configured for `repository` (`org/repo`).
    #[must_use]
    pub fn presubmits_for(&self, repository: &str) -> Option<&[Presubmit]> {
        self.presubmits.get(repository).map(Vec::as_slice)
    }

    /// Returns the postsubmits configured for `repository` (`org/repo`).
    #[must_use]
    pub fn postsubmits_for(&self, repository: &str) -> Option<&[Postsubmit]> {
        self.postsubmits.get(repository).map(Vec::as_slice)
    }

    /// Total number of jobs across all trigger types.
    #[must_use]
    pub fn job_count(&self) -> usize {
        let presubmits: usize = self.presubmits.values().map(Vec::len).sum();
        let postsubmits: usize = self.postsubmits.values().map(Vec::len).sum();
        presubmits + postsubmits + self.periodics.len()
    }
}

/// Fields shared by every job kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobBase {
    /// Unique job name.
    pub name: String,
    /// Labels attached to the job's pod. Presets are encoded here.
    pub labels: BTreeMap<String, String>,
    /// Maximum number of concurrent runs; zero means unlimited.
    pub max_concurrency: u32,
    /// Execution agent, usually `kubernetes`.
    pub agent: String,
    /// Build cluster alias.
    pub cluster: String,
    /// Namespace the pod runs in.
    pub namespace: Option<String>,
    /// Pod specification.
    pub spec: Option<PodSpec>,
    /// Decoration and checkout settings.
    #[serde(flatten)]
    pub utility_config: UtilityConfig,
}

impl JobBase {
    /// Returns `true` when the preset label is set to `"true"`.
    #[must_use]
    pub fn has_preset(&self, preset: Preset) -> bool {
        self.labels.get(preset.label()).map(String::as_str) == Some("true")
    }

    /// Returns the containers of the pod spec, or an empty slice.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        self.spec
            .as_ref()
            .map(|spec| spec.containers.as_slice())
            .unwrap_or_default()
    }

    /// Returns the first container of the pod spec.
    #[must_use]
    pub fn first_container(&self) -> Option<&Container> {
        self.containers().first()
    }
}

/// Pod utility settings: decoration and repository checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityConfig {
    /// Whether the pod utilities decorate the job.
    pub decorate: bool,
    /// Import path the primary repository is cloned to.
    pub path_alias: String,
    /// Overrides the clone URI of the primary repository.
    pub clone_uri: String,
    /// Skips submodule checkout.
    pub skip_submodules: bool,
    /// Additional repositories checked out next to the primary one.
    pub extra_refs: Vec<ExtraRef>,
}

/// An additional repository checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraRef {
    /// Owning organisation.
    pub org: String,
    /// Repository name.
    pub repo: String,
    /// Branch to check out.
    pub base_ref: String,
    /// Commit to check out, if pinned.
    pub base_sha: String,
    /// Import path the repository is cloned to.
    pub path_alias: String,
    /// Overrides the clone URI.
    pub clone_uri: String,
    /// Makes this checkout the working directory.
    pub work_dir: bool,
}

/// Branch filters. Entries are regular expressions matched against the whole
/// branch name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brancher {
    /// Branches the job runs against; empty means all.
    pub branches: Vec<String>,
    /// Branches the job never runs against.
    pub skip_branches: Vec<String>,
}

/// A job triggered by pull request activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presubmit {
    /// Shared job fields.
    #[serde(flatten)]
    pub job_base: JobBase,
    /// Branch filters.
    #[serde(flatten)]
    pub brancher: Brancher,
    /// Regular expression over changed paths that triggers the job.
    pub run_if_changed: Option<String>,
    /// Runs on every pull request.
    pub always_run: bool,
    /// Failure does not block merging.
    pub optional: bool,
    /// Suppresses the status report on GitHub.
    pub skip_report: bool,
    /// GitHub status context.
    pub context: String,
    /// Comment regular expression that triggers the job.
    pub trigger: String,
    /// Comment that re-runs the job.
    pub rerun_command: String,
}

/// A job triggered by a push to a tracked branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Postsubmit {
    /// Shared job fields.
    #[serde(flatten)]
    pub job_base: JobBase,
    /// Branch filters.
    #[serde(flatten)]
    pub brancher: Brancher,
    /// Regular expression over changed paths that triggers the job.
    pub run_if_changed: Option<String>,
}

/// A job triggered on a timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Periodic {
    /// Shared job fields.
    #[serde(flatten)]
    pub job_base: JobBase,
    /// Go duration string between runs, e.g. `1h`.
    pub interval: String,
    /// Cron expression; mutually exclusive with `interval`.
    pub cron: String,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Kubernetes pod specification, reduced to what the checks inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodSpec {
    /// Containers of the pod.
    pub containers: Vec<Container>,
}

/// A container in the job pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    /// Container name.
    pub name: String,
    /// Image reference.
    pub image: String,
    /// Entrypoint vector.
    pub command: Vec<String>,
    /// Arguments passed to the entrypoint.
    pub args: Vec<String>,
    /// Environment variables.
    pub env: Vec<EnvVar>,
    /// Security settings.
    pub security_context: Option<SecurityContext>,
}

/// A container environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// Container security settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityContext {
    /// Runs the container in privileged mode.
    pub privileged: bool,
}

/// Common access to the shared fields of every job kind.
pub trait Job {
    /// Returns the shared job fields.
    fn job_base(&self) -> &JobBase;

    /// Returns the job name.
    fn name(&self) -> &str {
        &self.job_base().name
    }
}

impl Job for Presubmit {
    fn job_base(&self) -> &JobBase {
        &self.job_base
    }
}

impl Job for Postsubmit {
    fn job_base(&self) -> &JobBase {
        &self.job_base
    }
}

impl Job for Periodic {
    fn job_base(&self) -> &JobBase {
        &self.job_base
    }
}
