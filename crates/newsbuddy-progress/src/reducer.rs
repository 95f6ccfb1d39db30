use std::collections::BTreeSet;

use newsbuddy_types::{BadgeId, CompletionEvent, ProgressRules, QuizScore, UserProgress, XpSchedule};

use crate::badges;
use crate::level::level_for;

/// Result of applying one completion to a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// The new snapshot. Fully consistent: level derived, badges merged.
    pub progress: UserProgress,
    /// XP added by this completion. Zero for a repeat completion.
    pub xp_gained: u64,
    /// Whether the article was completed for the first time.
    pub first_completion: bool,
    /// Badges that became unlocked with this completion.
    pub newly_unlocked: BTreeSet<BadgeId>,
    pub leveled_up: bool,
}

/// XP for a first completion: `per_article + round(fraction * per_quiz_correct)`.
pub fn xp_for(quiz: &QuizScore, schedule: &XpSchedule) -> u64 {
    let bonus = (quiz.fraction() * schedule.per_quiz_correct as f64).round() as u64;
    schedule.per_article.saturating_add(bonus)
}

/// Apply `event` to `before`, producing the next snapshot.
///
/// Pure: `before` is never modified, and the same inputs always produce the
/// same output. A repeat completion of an already completed article grants
/// no XP and keeps the category recorded at first completion, but still
/// advances the streak and re-runs badge evaluation, so a perfect retake can
/// unlock `perfect-quiz`.
pub fn apply_completion(
    before: &UserProgress,
    event: &CompletionEvent,
    rules: &ProgressRules,
) -> Completion {
    let first_completion = !before.has_completed(&event.article_id);
    let xp_gained = if first_completion {
        xp_for(&event.quiz, &rules.xp)
    } else {
        0
    };

    let mut after = before.clone();
    after.xp = before.xp.saturating_add(xp_gained);
    after.streak = before.streak.saturating_add(1);
    if first_completion {
        after
            .completed_articles
            .insert(event.article_id.clone(), event.category);
    }
    after.level = level_for(after.xp, &rules.xp);

    let newly_unlocked = badges::evaluate(event, before, &after, &rules.badges);
    after.badges.extend(newly_unlocked.iter().cloned());

    Completion {
        leveled_up: after.level > before.level,
        progress: after,
        xp_gained,
        first_completion,
        newly_unlocked,
    }
}

/// Snapshot with the streak cleared. Used by the calendar collaborator when
/// a day was missed; nothing else changes.
pub fn reset_streak(before: &UserProgress) -> UserProgress {
    UserProgress {
        streak: 0,
        ..before.clone()
    }
}
