//! Progress and gamification engine for the news reader.
//!
//! The core is a pure reducer ([`apply_completion`]) over an explicit
//! [`UserProgress`](newsbuddy_types::UserProgress) value. [`ProgressStore`]
//! owns the current snapshot for callers that want a single mutable handle,
//! and [`DailyStreak`] is the calendar collaborator that resets the streak on
//! a missed day.

pub mod badges;
pub mod error;
pub mod invariants;
pub mod level;
pub mod reducer;
pub mod replay;
pub mod store;
pub mod streak;

pub use error::{ProgressViolation, SnapshotError};
pub use invariants::{check_transition, validate_progress};
pub use level::{level_for, level_progress, xp_to_next_level};
pub use reducer::{Completion, apply_completion, reset_streak, xp_for};
pub use replay::{badge_history, replay, replay_from};
pub use store::ProgressStore;
pub use streak::DailyStreak;
