use newsbuddy_types::{ProgressRules, UserProgress};

use crate::error::ProgressViolation;
use crate::level::level_for;

pub(crate) fn check_level(
    progress: &UserProgress,
    rules: &ProgressRules,
) -> Result<(), ProgressViolation> {
    let expected = level_for(progress.xp, &rules.xp);
    if progress.level != expected {
        return Err(ProgressViolation::StaleLevel {
            xp: progress.xp,
            expected,
            actual: progress.level,
        });
    }
    Ok(())
}

/// One violation per held badge the catalog does not define, in id order.
pub(crate) fn unknown_badges(
    progress: &UserProgress,
    rules: &ProgressRules,
) -> Vec<ProgressViolation> {
    progress
        .badges
        .iter()
        .filter(|id| !rules.badges.contains(id))
        .map(|id| ProgressViolation::UnknownBadge {
            badge_id: id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsbuddy_types::BadgeId;

    #[test]
    fn stale_level_reports_expected_and_actual() {
        let rules = ProgressRules::default();
        let progress = UserProgress {
            xp: 520,
            ..UserProgress::new()
        };

        let err = check_level(&progress, &rules).unwrap_err();
        assert_eq!(
            err,
            ProgressViolation::StaleLevel {
                xp: 520,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn unknown_badges_are_listed_in_order() {
        let rules = ProgressRules::default();
        let mut progress = UserProgress::new();
        progress.badges.insert(BadgeId::from("zzz"));
        progress.badges.insert(BadgeId::from("first-read"));
        progress.badges.insert(BadgeId::from("aaa"));

        assert_eq!(
            unknown_badges(&progress, &rules),
            vec![
                ProgressViolation::UnknownBadge {
                    badge_id: BadgeId::from("aaa")
                },
                ProgressViolation::UnknownBadge {
                    badge_id: BadgeId::from("zzz")
                },
            ]
        );
    }
}
