use std::sync::Arc;

use chrono::NaiveDate;
use newsbuddy_types::{Category, ProgressError, QuizScore, UserProgress};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::ProgressStore;

/// Calendar collaborator for the per-event streak.
///
/// The engine itself bumps the streak on every completion. This tracks the
/// last calendar day with an accepted completion and clears the streak when
/// more than one day was skipped. Dates are supplied by the caller, so the
/// reader's local calendar decides what "a day" is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStreak {
    last_active: Option<NaiveDate>,
}

impl DailyStreak {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_active(&self) -> Option<NaiveDate> {
        self.last_active
    }

    /// Whether activity on `today` comes after at least one missed day.
    ///
    /// A date earlier than the last active day (clock moved back) never
    /// breaks the streak.
    pub fn is_broken(&self, today: NaiveDate) -> bool {
        match self.last_active {
            Some(last) => today.signed_duration_since(last).num_days() > 1,
            None => false,
        }
    }

    /// Record a completion on `today` through `store`.
    ///
    /// Clears the streak first when a day was missed. The last active day
    /// only advances when the store accepts the completion.
    pub fn record_completion(
        &mut self,
        today: NaiveDate,
        store: &mut ProgressStore,
        article_id: impl Into<String>,
        category: Category,
        quiz: QuizScore,
    ) -> Result<Arc<UserProgress>, ProgressError> {
        if self.is_broken(today) {
            debug!(last_active = ?self.last_active, %today, "missed a day");
            store.reset_streak();
        }
        let progress = store.record_completion(article_id, category, quiz)?;
        self.last_active = Some(self.last_active.map_or(today, |last| last.max(today)));
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn complete(
        clock: &mut DailyStreak,
        store: &mut ProgressStore,
        today: NaiveDate,
        id: &str,
    ) -> u32 {
        clock
            .record_completion(today, store, id, Category::World, QuizScore::new(0.5))
            .unwrap()
            .streak
    }

    #[test]
    fn same_and_next_day_keep_the_streak() {
        let mut clock = DailyStreak::new();
        let mut store = ProgressStore::new();

        assert_eq!(complete(&mut clock, &mut store, day(1), "a"), 1);
        assert_eq!(complete(&mut clock, &mut store, day(1), "b"), 2);
        assert_eq!(complete(&mut clock, &mut store, day(2), "c"), 3);
        assert_eq!(clock.last_active(), Some(day(2)));
    }

    #[test_log::test]
    fn skipped_day_restarts_the_streak() {
        let mut clock = DailyStreak::new();
        let mut store = ProgressStore::new();

        complete(&mut clock, &mut store, day(1), "a");
        complete(&mut clock, &mut store, day(2), "b");
        assert_eq!(complete(&mut clock, &mut store, day(4), "c"), 1);
        assert_eq!(store.snapshot().xp, 375);
    }

    #[test]
    fn rejected_completion_does_not_advance_the_day() {
        let mut clock = DailyStreak::new();
        let mut store = ProgressStore::new();
        complete(&mut clock, &mut store, day(1), "a");

        let err = clock.record_completion(day(2), &mut store, "", Category::World, QuizScore::new(0.5));
        assert!(err.is_err());
        assert_eq!(clock.last_active(), Some(day(1)));
    }

    #[test]
    fn earlier_date_never_breaks_or_rewinds() {
        let mut clock = DailyStreak::new();
        let mut store = ProgressStore::new();
        complete(&mut clock, &mut store, day(10), "a");

        assert!(!clock.is_broken(day(3)));
        assert_eq!(complete(&mut clock, &mut store, day(3), "b"), 2);
        assert_eq!(clock.last_active(), Some(day(10)));
    }
}
