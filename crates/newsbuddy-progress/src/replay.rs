use std::collections::BTreeMap;

use newsbuddy_types::{BadgeId, JournalEntry, JournalEvent, ProgressRules, UserProgress};

use crate::reducer::{apply_completion, reset_streak};

/// Rebuild progress by folding the reducer over journal entries, starting
/// from fresh state. Streak resets are applied where they were recorded.
///
/// This is the recovery path for callers that persist the journal rather
/// than the snapshot. For the same event order it yields exactly the
/// snapshot a live [`crate::ProgressStore`] would hold.
///
/// Complexity: O(n) over `entries.len()`.
pub fn replay(entries: &[JournalEntry], rules: &ProgressRules) -> UserProgress {
    replay_from(UserProgress::new(), entries, rules)
}

/// Like [`replay`], continuing from an existing snapshot.
pub fn replay_from(
    base: UserProgress,
    entries: &[JournalEntry],
    rules: &ProgressRules,
) -> UserProgress {
    entries
        .iter()
        .fold(base, |progress, entry| match &entry.event {
            JournalEvent::Completion(event) => apply_completion(&progress, event, rules).progress,
            JournalEvent::StreakReset => reset_streak(&progress),
        })
}

/// Sequence number at which each badge was unlocked, replaying from fresh
/// state. Badges never unlocked are absent.
pub fn badge_history(entries: &[JournalEntry], rules: &ProgressRules) -> BTreeMap<BadgeId, u64> {
    let mut history = BTreeMap::new();
    let mut progress = UserProgress::new();
    for entry in entries {
        let event = match &entry.event {
            JournalEvent::Completion(event) => event,
            JournalEvent::StreakReset => {
                progress = reset_streak(&progress);
                continue;
            }
        };
        let done = apply_completion(&progress, event, rules);
        for badge_id in done.newly_unlocked {
            history.entry(badge_id).or_insert(entry.sequence);
        }
        progress = done.progress;
    }
    history
}
