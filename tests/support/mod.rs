//! Shared test utilities.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tempfile::TempDir;

/// Relative path of the varkes app-connector-client job file.
pub const VARKES_APP_CONNECTOR_CLIENT: &str =
    "prow/jobs/incubator/varkes/app-connector-client/app-connector-client.yaml";

/// Returns the absolute path of a file under `tests/fixtures`.
pub fn fixture_path(relative: &str) -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Creates a temporary directory for job file tests.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Writes `content` to `file_name` inside `temp_dir` and returns its path.
///
/// # Panics
///
/// Panics if the path is not UTF-8 or the file cannot be written.
pub fn write_job_file(temp_dir: &TempDir, file_name: &str, content: &str) -> Utf8PathBuf {
    let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()));
    let dir = Dir::open_ambient_dir(&root, ambient_authority())
        .unwrap_or_else(|error| panic!("failed to open temporary directory: {error}"));
    dir.write(file_name, content)
        .unwrap_or_else(|error| panic!("failed to write {file_name}: {error}"));
    root.join(file_name)
}
