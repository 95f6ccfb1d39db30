use std::collections::BTreeSet;

use newsbuddy_types::{BadgeCatalog, BadgeId, BadgeRule, CompletionEvent, UserProgress};

/// Badges newly unlocked by one completion.
///
/// Every catalog rule is checked independently against `after` (and
/// `event` for quiz rules). Badges already held in `before` or `after` never
/// fire again, so evaluating a snapshot that already absorbed its unlocks
/// returns the empty set.
pub fn evaluate(
    event: &CompletionEvent,
    before: &UserProgress,
    after: &UserProgress,
    catalog: &BadgeCatalog,
) -> BTreeSet<BadgeId> {
    catalog
        .iter()
        .filter(|def| !before.has_badge(&def.badge.id) && !after.has_badge(&def.badge.id))
        .filter(|def| rule_satisfied(&def.rule, event, after))
        .map(|def| def.badge.id.clone())
        .collect()
}

/// Whether `rule` holds for the post-completion snapshot.
pub fn rule_satisfied(rule: &BadgeRule, event: &CompletionEvent, after: &UserProgress) -> bool {
    match rule {
        BadgeRule::CompletedExactly { count } => after.completed_count() == *count,
        BadgeRule::CompletedAtLeast { count } => after.completed_count() >= *count,
        BadgeRule::PerfectQuiz => event.quiz.is_perfect(),
        BadgeRule::CategoryAtLeast { category, count } => after.completed_in(*category) >= *count,
    }
}
