use std::sync::Arc;

use chrono::Utc;
use newsbuddy_types::{
    Category, CompletionEvent, CompletionJournal, JournalEvent, ProgressError, ProgressRules,
    QuizScore, UserProgress,
};
use tracing::{debug, info, warn};

use crate::error::SnapshotError;
use crate::invariants::{check_transition, validate_progress};
use crate::reducer::{self, Completion};

/// Owner of one reader's current progress snapshot.
///
/// Every mutation builds a new `UserProgress` and swaps it in whole, so a
/// snapshot handed out by [`ProgressStore::snapshot`] never changes under the
/// holder. Single-threaded: callers drive it from UI event handlers one
/// completion at a time.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    rules: Arc<ProgressRules>,
    current: Arc<UserProgress>,
    journal: Option<CompletionJournal>,
}

impl ProgressStore {
    /// Fresh progress under the standard rules.
    pub fn new() -> Self {
        Self::with_rules(ProgressRules::standard())
    }

    pub fn with_rules(rules: Arc<ProgressRules>) -> Self {
        Self {
            rules,
            current: Arc::new(UserProgress::new()),
            journal: None,
        }
    }

    /// Adopt a previously saved snapshot after validating it against `rules`.
    pub fn from_snapshot(
        progress: UserProgress,
        rules: Arc<ProgressRules>,
    ) -> Result<Self, SnapshotError> {
        let violations = validate_progress(&progress, &rules);
        if !violations.is_empty() {
            warn!(count = violations.len(), "refusing inconsistent snapshot");
            return Err(SnapshotError::Inconsistent(violations));
        }
        Ok(Self {
            rules,
            current: Arc::new(progress),
            journal: None,
        })
    }

    /// Keep a journal of accepted completions from now on.
    pub fn with_journal(mut self) -> Self {
        self.journal.get_or_insert_with(CompletionJournal::new);
        self
    }

    pub fn snapshot(&self) -> Arc<UserProgress> {
        Arc::clone(&self.current)
    }

    pub fn rules(&self) -> &ProgressRules {
        &self.rules
    }

    pub fn journal(&self) -> Option<&CompletionJournal> {
        self.journal.as_ref()
    }

    /// Record that the reader finished `article_id`'s quiz.
    ///
    /// Returns the new snapshot. An empty or blank `article_id` is refused
    /// with `InvalidInput` and the current snapshot stays as it was.
    pub fn record_completion(
        &mut self,
        article_id: impl Into<String>,
        category: Category,
        quiz: QuizScore,
    ) -> Result<Arc<UserProgress>, ProgressError> {
        let event = CompletionEvent::new(article_id, category, quiz).inspect_err(|err| {
            warn!(%err, %category, "completion rejected");
        })?;
        self.apply(event);
        Ok(self.snapshot())
    }

    /// Apply an already validated event and report what it changed.
    pub fn apply(&mut self, event: CompletionEvent) -> Completion {
        if event.quiz.is_out_of_range() {
            debug!(
                fraction = event.quiz.fraction(),
                "quiz score clamped to [0, 1]"
            );
        }

        let completion = reducer::apply_completion(&self.current, &event, &self.rules);
        debug_assert!(
            check_transition(&self.current, &completion.progress, &self.rules).is_ok(),
            "completion produced an inconsistent transition"
        );

        debug!(
            article_id = %event.article_id,
            category = %event.category,
            xp_gained = completion.xp_gained,
            first_completion = completion.first_completion,
            "completion recorded"
        );
        for badge_id in &completion.newly_unlocked {
            info!(badge = %badge_id, "badge unlocked");
        }
        if completion.leveled_up {
            info!(level = completion.progress.level, "level up");
        }

        self.current = Arc::new(completion.progress.clone());
        if let Some(journal) = self.journal.as_mut() {
            journal.append(event, Utc::now());
        }
        completion
    }

    /// Clear the streak. Called by the calendar collaborator on a missed day.
    pub fn reset_streak(&mut self) -> Arc<UserProgress> {
        if self.current.streak > 0 {
            debug!(streak = self.current.streak, "streak reset");
            self.current = Arc::new(reducer::reset_streak(&self.current));
            if let Some(journal) = self.journal.as_mut() {
                journal.append(JournalEvent::StreakReset, Utc::now());
            }
        }
        self.snapshot()
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
