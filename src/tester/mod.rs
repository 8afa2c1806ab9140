//! Assertion helpers for job configuration tests.
//!
//! The `check_*` functions are pure and return what they found missing.
//! [`JobAssertions`] routes those results into the enclosing test: fatal
//! failures panic on the spot, the rest are reported together when the
//! recorder goes out of scope.

mod assertions;
mod checks;
mod error;

pub use assertions::JobAssertions;
pub use checks::{
    check_command, check_extra_ref, check_extra_ref_test_infra, check_extra_refs, check_presets,
    check_run_if_changed,
};
pub use error::JobCheckError;
