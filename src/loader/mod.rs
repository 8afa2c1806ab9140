//! Loading job configuration files from disk.
//!
//! The loader only fails on I/O and syntax or shape errors. Whether the
//! expected repositories and jobs are present is for the assertion helpers
//! to decide.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use jobtester::loader::read_job_config;
//!
//! let config = read_job_config(Utf8Path::new("prow/jobs/varkes.yaml"))
//!     .expect("job configuration should load");
//! println!("{} jobs", config.job_count());
//! ```

mod error;

use std::io::Read;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::File;

pub use error::LoadError;

use crate::job::JobConfig;
use crate::schema::{JobSchema, ProwSchema};

/// Reads and parses the Prow job configuration at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Open`] when the file cannot be opened,
/// [`LoadError::Read`] when its content cannot be read, and
/// [`LoadError::Unmarshal`] when the content is not a valid job
/// configuration.
pub fn read_job_config(path: &Utf8Path) -> Result<JobConfig, LoadError> {
    read_job_config_with(&ProwSchema, path)
}

/// Reads the file at `path` and parses it with `schema`.
///
/// The file handle is dropped before parsing starts, whichever way reading
/// ends.
///
/// # Errors
///
/// Returns the same errors as [`read_job_config`].
pub fn read_job_config_with(
    schema: &dyn JobSchema,
    path: &Utf8Path,
) -> Result<JobConfig, LoadError> {
    let bytes = read_bytes(path)?;
    let config = schema
        .parse_job_config(&bytes)
        .map_err(|error| LoadError::Unmarshal {
            path: path.to_owned(),
            message: error.to_string(),
        })?;

    tracing::debug!(
        "loaded job configuration '{path}': {} presubmit repositories, {} postsubmit repositories, {} periodics",
        config.presubmits.len(),
        config.postsubmits.len(),
        config.periodics.len()
    );
    Ok(config)
}

fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open_ambient(path, ambient_authority()).map_err(|error| {
        LoadError::Open {
            path: path.to_owned(),
            message: error.to_string(),
        }
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|error| LoadError::Read {
            path: path.to_owned(),
            message: error.to_string(),
        })?;
    Ok(bytes)
}
