//! Regular-expression matching over changed files, branches, and comments.
//!
//! Configuration files store patterns as plain strings. The matchers here
//! compile them on demand so that a loaded [`JobConfig`](super::JobConfig)
//! stays an inert value.

use regex::Regex;

use super::error::PatternError;
use super::types::{Brancher, Job, Postsubmit, Presubmit};

/// Compiled `run_if_changed` expression.
#[derive(Debug, Clone)]
pub struct ChangeMatcher {
    regex: Regex,
}

impl ChangeMatcher {
    /// Compiles the `run_if_changed` pattern of job `job`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern is not a valid regular
    /// expression.
    pub fn compile(job: &str, pattern: &str) -> Result<Self, PatternError> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|error| PatternError::new(job, pattern, &error))
    }

    /// Returns `true` when any changed path matches.
    #[must_use]
    pub fn matches_any<S: AsRef<str>>(&self, changes: &[S]) -> bool {
        changes
            .iter()
            .any(|change| self.regex.is_match(change.as_ref()))
    }
}

fn runs_against_changes<S: AsRef<str>>(
    job: &str,
    run_if_changed: Option<&str>,
    changes: &[S],
) -> Result<bool, PatternError> {
    let Some(pattern) = run_if_changed.filter(|pattern| !pattern.is_empty()) else {
        return Ok(false);
    };
    Ok(ChangeMatcher::compile(job, pattern)?.matches_any(changes))
}

/// Compiled branch filters.
#[derive(Debug, Clone)]
pub struct BranchFilter {
    branches: Option<Regex>,
    skip_branches: Option<Regex>,
}

impl BranchFilter {
    /// Returns `true` when a job with these filters runs against `branch`.
    ///
    /// Skip patterns win over branch patterns; no branch patterns means every
    /// branch.
    #[must_use]
    pub fn should_run(&self, branch: &str) -> bool {
        if self
            .skip_branches
            .as_ref()
            .is_some_and(|skip| skip.is_match(branch))
        {
            return false;
        }
        self.branches
            .as_ref()
            .is_none_or(|branches| branches.is_match(branch))
    }
}

impl Brancher {
    /// Compiles the branch filters of job `job`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when any entry is not a valid regular
    /// expression.
    pub fn compile(&self, job: &str) -> Result<BranchFilter, PatternError> {
        Ok(BranchFilter {
            branches: compile_alternation(job, &self.branches)?,
            skip_branches: compile_alternation(job, &self.skip_branches)?,
        })
    }

    /// Returns `true` when a job with these filters runs against `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when a filter does not compile.
    pub fn should_run(&self, job: &str, branch: &str) -> Result<bool, PatternError> {
        Ok(self.compile(job)?.should_run(branch))
    }
}

/// Joins `patterns` into one expression anchored to the whole input.
fn compile_alternation(job: &str, patterns: &[String]) -> Result<Option<Regex>, PatternError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let alternation = patterns
        .iter()
        .map(|pattern| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|");
    let anchored = format!("^(?:{alternation})$");
    Regex::new(&anchored)
        .map(Some)
        .map_err(|error| PatternError::new(job, &patterns.join(", "), &error))
}

impl Presubmit {
    /// Returns `true` when the job's `run_if_changed` matches any changed
    /// path. Jobs without `run_if_changed` are never change-triggered.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `run_if_changed` does not compile.
    pub fn runs_against_changes<S: AsRef<str>>(&self, changes: &[S]) -> Result<bool, PatternError> {
        runs_against_changes(self.name(), self.run_if_changed.as_deref(), changes)
    }

    /// Returns the comment pattern that triggers the job.
    ///
    /// Falls back to `/test <name>` with optional surrounding job names when
    /// `trigger` is unset.
    #[must_use]
    pub fn trigger_pattern(&self) -> String {
        if self.trigger.is_empty() {
            format!(r"(?m)^/test( | .* ){},?($|\s.*)", regex::escape(self.name()))
        } else {
            self.trigger.clone()
        }
    }

    /// Returns the comment that re-runs the job.
    #[must_use]
    pub fn rerun_command_or_default(&self) -> String {
        if self.rerun_command.is_empty() {
            format!("/test {}", self.name())
        } else {
            self.rerun_command.clone()
        }
    }

    /// Returns `true` when `comment` triggers the job.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the trigger does not compile.
    pub fn trigger_matches(&self, comment: &str) -> Result<bool, PatternError> {
        let pattern = self.trigger_pattern();
        Regex::new(&pattern)
            .map(|regex| regex.is_match(comment))
            .map_err(|error| PatternError::new(self.name(), &pattern, &error))
    }
}

impl Postsubmit {
    /// Returns `true` when the job's `run_if_changed` matches any changed
    /// path. Jobs without `run_if_changed` are never change-triggered.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `run_if_changed` does not compile.
    pub fn runs_against_changes<S: AsRef<str>>(&self, changes: &[S]) -> Result<bool, PatternError> {
        runs_against_changes(self.name(), self.run_if_changed.as_deref(), changes)
    }
}
