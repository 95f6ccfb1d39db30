//! Progress invariant checking.
//!
//! Two modes, mirroring how snapshots enter the engine:
//! - **Batch** ([`validate_progress`]): collects every violation in one
//!   snapshot. Used when adopting a snapshot from storage.
//! - **Incremental** ([`check_transition`]): validates one reducer step,
//!   short-circuiting on the first violation. The store runs it after every
//!   completion in debug builds.
//!
//! Sub-modules are read-only: [`snapshot`] covers a single `UserProgress`,
//! [`transition`] covers a `(before, after)` pair.

mod snapshot;
mod transition;

use crate::error::ProgressViolation;
use newsbuddy_types::{ProgressRules, UserProgress};

/// Batch-validate a snapshot against `rules`, returning all violations.
///
/// An empty vector means the snapshot is safe to adopt.
pub fn validate_progress(progress: &UserProgress, rules: &ProgressRules) -> Vec<ProgressViolation> {
    let mut violations = Vec::new();
    if let Err(v) = snapshot::check_level(progress, rules) {
        violations.push(v);
    }
    violations.extend(snapshot::unknown_badges(progress, rules));
    violations
}

/// Validate one transition: `after` must be consistent on its own and must
/// not undo anything `before` earned.
pub fn check_transition(
    before: &UserProgress,
    after: &UserProgress,
    rules: &ProgressRules,
) -> Result<(), ProgressViolation> {
    transition::check(before, after)?;
    snapshot::check_level(after, rules)?;
    Ok(())
}
