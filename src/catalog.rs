//! Project constants shared by the loader, the CLI, and the assertion helpers.
//!
//! Image tags, script paths, and the owning organisation all change together
//! whenever the job configuration schema is bumped, so they live in one
//! immutable table rather than as literals scattered across tests.

use std::fmt;

/// Golang buildpack image.
pub const IMAGE_GOLANG_BUILDPACK_LATEST: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/buildpack-golang:v20181119-afd3fbd";

/// Node.js buildpack image.
pub const IMAGE_NODE_BUILDPACK_LATEST: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/buildpack-node:v20181130-b28250b";

/// Node.js buildpack image with Chromium installed.
pub const IMAGE_NODE_CHROMIUM_BUILDPACK_LATEST: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/buildpack-node-chromium:v20181207-d46c013";

/// Bootstrap image.
pub const IMAGE_BOOTSTRAP_LATEST: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/bootstrap:v20181121-f3ea5ce";

/// Version 0.0.1 of the bootstrap image.
pub const IMAGE_BOOTSTRAP_001: &str = "eu.gcr.io/kyma-project/prow/bootstrap:0.0.1";

/// Bootstrap image bundling Helm.
pub const IMAGE_BOOTSTRAP_HELM_20181121: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/bootstrap-helm:v20181121-f2f12bc";

const DEFAULT_ORG: &str = "kyma-project";
const DEFAULT_BASE_REF: &str = "master";
const DEFAULT_TEST_INFRA_REPO: &str = "test-infra";
const GOPATH_SOURCE_ROOT: &str = "/home/prow/go/src/github.com";

/// A label that enables a predefined environment feature on a job.
///
/// A preset is present on a job when its label map holds the preset key with
/// the value `"true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Docker-in-docker.
    DindEnabled,
    /// GCR push service account.
    GcrPush,
    /// Docker repository.
    DockerPushRepo,
    /// Docker repository for test-infra images.
    DockerPushRepoTestInfra,
    /// Docker repository for incubator images.
    DockerPushRepoIncubator,
    /// Pull request build environment.
    BuildPr,
    /// Master build environment.
    BuildMaster,
    /// Release build environment.
    BuildRelease,
    /// GitHub token of the CI bot.
    BotGithubToken,
    /// GitHub SSH key of the CI bot.
    BotGithubSsh,
}

impl Preset {
    /// Every known preset.
    pub const ALL: [Self; 10] = [
        Self::DindEnabled,
        Self::GcrPush,
        Self::DockerPushRepo,
        Self::DockerPushRepoTestInfra,
        Self::DockerPushRepoIncubator,
        Self::BuildPr,
        Self::BuildMaster,
        Self::BuildRelease,
        Self::BotGithubToken,
        Self::BotGithubSsh,
    ];

    /// Returns the label key for this preset.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DindEnabled => "preset-dind-enabled",
            Self::GcrPush => "preset-sa-gcr-push",
            Self::DockerPushRepo => "preset-docker-push-repository",
            Self::DockerPushRepoTestInfra => "preset-docker-push-repository-test-infra",
            Self::DockerPushRepoIncubator => "preset-docker-push-repository-incubator",
            Self::BuildPr => "preset-build-pr",
            Self::BuildMaster => "preset-build-master",
            Self::BuildRelease => "preset-build-release",
            Self::BotGithubToken => "preset-bot-github-token",
            Self::BotGithubSsh => "preset-bot-github-ssh",
        }
    }

    /// Looks a preset up by its label key.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Organisation, branch, and path conventions the job checks compare against.
///
/// The default catalog describes the `kyma-project` organisation. The CLI can
/// override the organisation and base ref; everything else is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    org: String,
    base_ref: String,
    test_infra_repo: String,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_owned(),
            base_ref: DEFAULT_BASE_REF.to_owned(),
            test_infra_repo: DEFAULT_TEST_INFRA_REPO.to_owned(),
        }
    }
}

impl ProjectCatalog {
    /// Creates a catalog for the given organisation and base ref.
    #[must_use]
    pub fn new(org: impl Into<String>, base_ref: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            base_ref: base_ref.into(),
            ..Self::default()
        }
    }

    /// Returns the organisation owning the extra references.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the branch extra references must track.
    #[must_use]
    pub fn base_ref(&self) -> &str {
        &self.base_ref
    }

    /// Returns the name of the infrastructure repository.
    #[must_use]
    pub fn test_infra_repo(&self) -> &str {
        &self.test_infra_repo
    }

    /// Returns the checkout directory of the organisation inside a job pod.
    #[must_use]
    pub fn project_dir(&self) -> String {
        format!("{GOPATH_SOURCE_ROOT}/{}", self.org)
    }

    /// Returns the `path_alias` an extra reference to `repository` must use.
    #[must_use]
    pub fn path_alias_for(&self, repository: &str) -> String {
        format!("github.com/{}/{repository}", self.org)
    }

    /// Returns the path of the standard build script.
    #[must_use]
    pub fn build_script(&self) -> String {
        self.test_infra_script("build.sh")
    }

    /// Returns the path of the governance script.
    #[must_use]
    pub fn governance_script(&self) -> String {
        self.test_infra_script("governance.sh")
    }

    fn test_infra_script(&self, script: &str) -> String {
        format!(
            "{}/{}/prow/scripts/{script}",
            self.project_dir(),
            self.test_infra_repo
        )
    }
}
