//! Unit tests for job lookup and pattern matching.

use rstest::{fixture, rstest};

use super::{
    Brancher, Container, Job, JobBase, PodSpec, Postsubmit, Presubmit, find_periodic_by_name,
    find_postsubmit_by_name, find_presubmit_by_name,
};
use crate::catalog::Preset;
use crate::job::Periodic;

fn presubmit(name: &str) -> Presubmit {
    Presubmit {
        job_base: JobBase {
            name: name.to_owned(),
            ..JobBase::default()
        },
        ..Presubmit::default()
    }
}

#[fixture]
fn presubmits() -> Vec<Presubmit> {
    vec![
        presubmit("varkes-app-connector-client"),
        presubmit("varkes-openapi-mock"),
    ]
}

#[rstest]
fn find_presubmit_returns_matching_job(presubmits: Vec<Presubmit>) {
    let found = find_presubmit_by_name(&presubmits, "varkes-openapi-mock");

    assert_eq!(found.map(Job::name), Some("varkes-openapi-mock"));
}

#[rstest]
fn find_presubmit_returns_none_for_unknown_name(presubmits: Vec<Presubmit>) {
    assert!(find_presubmit_by_name(&presubmits, "missing").is_none());
}

#[rstest]
fn find_returns_first_of_duplicate_names() {
    let mut first = presubmit("dup");
    first.optional = true;
    let jobs = vec![first, presubmit("dup")];

    let found = find_presubmit_by_name(&jobs, "dup").expect("job should be found");

    assert!(found.optional, "first entry should win");
}

#[rstest]
fn find_postsubmit_and_periodic_by_name() {
    let postsubmits = vec![Postsubmit {
        job_base: JobBase {
            name: "post-varkes".to_owned(),
            ..JobBase::default()
        },
        ..Postsubmit::default()
    }];
    let periodics = vec![Periodic {
        job_base: JobBase {
            name: "nightly-cleanup".to_owned(),
            ..JobBase::default()
        },
        interval: "24h".to_owned(),
        ..Periodic::default()
    }];

    assert!(find_postsubmit_by_name(&postsubmits, "post-varkes").is_some());
    assert!(find_postsubmit_by_name(&postsubmits, "nightly-cleanup").is_none());
    assert_eq!(
        find_periodic_by_name(&periodics, "nightly-cleanup").map(|job| job.interval.as_str()),
        Some("24h")
    );
    assert!(find_periodic_by_name(&[], "nightly-cleanup").is_none());
}

#[rstest]
#[case::matching_dir("app-connector-client/index.js", true)]
#[case::nested("app-connector-client/src/a/b.ts", true)]
#[case::other_dir("openapi-mock/index.js", false)]
#[case::not_prefix("docs/app-connector-client/README.md", false)]
fn presubmit_runs_against_changes(#[case] changed: &str, #[case] expected: bool) {
    let mut job = presubmit("varkes-app-connector-client");
    job.run_if_changed = Some("^app-connector-client/".to_owned());

    let runs = job
        .runs_against_changes(&[changed])
        .expect("pattern should compile");

    assert_eq!(runs, expected);
}

#[rstest]
fn job_without_run_if_changed_is_not_change_triggered() {
    let job = presubmit("always");

    assert_eq!(job.runs_against_changes(&["anything"]), Ok(false));
}

#[rstest]
fn invalid_run_if_changed_reports_job_and_pattern() {
    let mut job = presubmit("broken");
    job.run_if_changed = Some("^(unclosed".to_owned());

    let error = job
        .runs_against_changes(&["unclosed/file"])
        .expect_err("pattern should not compile");

    assert_eq!(error.job, "broken");
    assert_eq!(error.pattern, "^(unclosed");
}

#[rstest]
fn postsubmit_runs_against_changes() {
    let job = Postsubmit {
        run_if_changed: Some("^app-connector-client/".to_owned()),
        ..Postsubmit::default()
    };

    assert_eq!(
        job.runs_against_changes(&["README.md", "app-connector-client/package.json"]),
        Ok(true)
    );
}

#[rstest]
#[case::no_filters(vec![], vec![], "feature/x", true)]
#[case::listed(vec!["master"], vec![], "master", true)]
#[case::unlisted(vec!["master"], vec![], "release-1.0", false)]
#[case::anchored(vec!["master"], vec![], "master-old", false)]
#[case::pattern(vec!["release-.*"], vec![], "release-1.0", true)]
#[case::skipped(vec![], vec!["release-.*"], "release-1.0", false)]
#[case::skip_wins(vec!["release-.*"], vec!["release-0\\..*"], "release-0.9", false)]
fn brancher_should_run(
    #[case] branches: Vec<&str>,
    #[case] skip_branches: Vec<&str>,
    #[case] branch: &str,
    #[case] expected: bool,
) {
    let brancher = Brancher {
        branches: branches.into_iter().map(str::to_owned).collect(),
        skip_branches: skip_branches.into_iter().map(str::to_owned).collect(),
    };

    assert_eq!(brancher.should_run("job", branch), Ok(expected));
}

#[rstest]
fn invalid_branch_pattern_is_an_error() {
    let brancher = Brancher {
        branches: vec!["[".to_owned()],
        skip_branches: Vec::new(),
    };

    assert!(brancher.should_run("job", "master").is_err());
}

#[rstest]
#[case::exact("/test varkes-app-connector-client", true)]
#[case::among_others("/test lint varkes-app-connector-client", true)]
#[case::comma_separated("/test varkes-app-connector-client, lint", true)]
#[case::later_line("looks good\n/test varkes-app-connector-client", true)]
#[case::other_job("/test varkes-openapi-mock", false)]
#[case::prefix_only("/test varkes-app-connector-client-extra", false)]
fn default_trigger_matches(#[case] comment: &str, #[case] expected: bool) {
    let job = presubmit("varkes-app-connector-client");

    assert_eq!(job.trigger_matches(comment), Ok(expected));
}

#[rstest]
fn explicit_trigger_and_rerun_command_take_precedence() {
    let mut job = presubmit("varkes");
    job.trigger = "(?m)^/retest-varkes$".to_owned();
    job.rerun_command = "/retest-varkes".to_owned();

    assert_eq!(job.trigger_matches("/retest-varkes"), Ok(true));
    assert_eq!(job.trigger_matches("/test varkes"), Ok(false));
    assert_eq!(job.rerun_command_or_default(), "/retest-varkes");
    assert_eq!(presubmit("varkes").rerun_command_or_default(), "/test varkes");
}

#[rstest]
fn job_base_reports_presets_and_first_container() {
    let base = JobBase {
        labels: [
            ("preset-dind-enabled".to_owned(), "true".to_owned()),
            ("preset-build-pr".to_owned(), "false".to_owned()),
        ]
        .into_iter()
        .collect(),
        spec: Some(PodSpec {
            containers: vec![Container {
                image: "busybox".to_owned(),
                ..Container::default()
            }],
        }),
        ..JobBase::default()
    };

    assert!(base.has_preset(Preset::DindEnabled));
    assert!(!base.has_preset(Preset::BuildPr));
    assert!(!base.has_preset(Preset::GcrPush));
    assert_eq!(
        base.first_container().map(|c| c.image.as_str()),
        Some("busybox")
    );
    assert!(JobBase::default().first_container().is_none());
}
