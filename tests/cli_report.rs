//! CLI integration tests for the job report.
//!
//! These tests spawn the `jobtester` binary as a subprocess to verify its
//! output and exit behaviour.

mod support;

use std::process::{Command, Output};

use rstest::rstest;

use support::{VARKES_APP_CONNECTOR_CLIENT, create_temp_dir, fixture_path};

/// Returns the path to the built binary.
fn binary_path() -> std::path::PathBuf {
    let mut path = std::env::current_exe()
        .unwrap_or_else(|error| panic!("failed to get current exe path: {error}"));
    path.pop(); // remove test binary name
    path.pop(); // remove deps
    path.push("jobtester");
    path
}

fn run_jobtester(args: &[&str]) -> Output {
    // Run outside the repository so no `.jobtester.toml` is discovered.
    let working_dir = create_temp_dir();
    let mut command = Command::new(binary_path());
    command.args(args).current_dir(working_dir.path());

    command
        .env_remove("JOBTESTER_FILE")
        .env_remove("JOBTESTER_CHANGED_FILE")
        .env_remove("JOBTESTER_ORG")
        .env_remove("JOBTESTER_BASE_REF")
        .env_remove("JOBTESTER_FORMAT");

    command
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "expected successful exit, got: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn summarises_fixture_jobs() {
    let path = fixture_path(VARKES_APP_CONNECTOR_CLIENT);

    let stdout = stdout_of(&run_jobtester(&["--file", path.as_str()]));

    assert!(stdout.starts_with(&format!("Loaded job configuration from {path}\n")));
    assert!(stdout.contains("  kyma-incubator/varkes:\n"), "{stdout}");
    assert!(
        stdout.contains(
            "    varkes-app-connector-client branches=[master] \
             run_if_changed=^app-connector-client/ test-infra=ok"
        ),
        "{stdout}"
    );
    assert!(stdout.ends_with("Periodics:\n  (none)\n"), "{stdout}");
}

#[rstest]
#[case::component_change("app-connector-client/index.js", "triggered=yes")]
#[case::unrelated_change("docs/README.md", "triggered=no")]
fn reports_whether_change_triggers_presubmit(#[case] changed_file: &str, #[case] expected: &str) {
    let path = fixture_path(VARKES_APP_CONNECTOR_CLIENT);

    let stdout = stdout_of(&run_jobtester(&[
        "--file",
        path.as_str(),
        "--changed-file",
        changed_file,
    ]));

    assert!(stdout.contains(expected), "{stdout}");
}

#[test]
fn writes_json_when_requested() {
    let path = fixture_path(VARKES_APP_CONNECTOR_CLIENT);

    let stdout = stdout_of(&run_jobtester(&["--file", path.as_str(), "--format", "json"]));

    let value: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|error| panic!("report should be JSON: {error}\n{stdout}"));
    assert!(value["presubmits"]["kyma-incubator/varkes"].is_array(), "{stdout}");
}

#[rstest]
#[case::missing_flag(&[], "job configuration file is required")]
#[case::missing_file(&["--file", "/nonexistent/jobs.yaml"], "while opening file [/nonexistent/jobs.yaml]")]
#[case::unknown_format(&["--format", "xml", "--file", "jobs.yaml"], "unknown output format 'xml'")]
fn fails_with_message(#[case] args: &[&str], #[case] expected_stderr: &str) {
    let output = run_jobtester(args);

    assert!(!output.status.success(), "expected failure exit status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(expected_stderr),
        "expected stderr to contain {expected_stderr:?}, got: {stderr}"
    );
}
