//! Monotonicity between consecutive snapshots.
//!
//! Checked in order: xp, completed articles, badges. The streak is free to
//! move in either direction since the calendar collaborator may reset it.

use newsbuddy_types::UserProgress;

use crate::error::ProgressViolation;

pub(crate) fn check(before: &UserProgress, after: &UserProgress) -> Result<(), ProgressViolation> {
    if after.xp < before.xp {
        return Err(ProgressViolation::XpDecreased {
            before: before.xp,
            after: after.xp,
        });
    }
    if after.xp != before.xp && after.completed_count() == before.completed_count() {
        return Err(ProgressViolation::XpWithoutNewArticle {
            before: before.xp,
            after: after.xp,
        });
    }

    for (article_id, category) in &before.completed_articles {
        match after.completed_articles.get(article_id) {
            None => {
                return Err(ProgressViolation::ArticleForgotten {
                    article_id: article_id.clone(),
                });
            }
            Some(now) if now != category => {
                return Err(ProgressViolation::CategoryChanged {
                    article_id: article_id.clone(),
                    before: *category,
                    after: *now,
                });
            }
            Some(_) => {}
        }
    }

    if let Some(badge_id) = before.badges.difference(&after.badges).next() {
        return Err(ProgressViolation::BadgeRevoked {
            badge_id: badge_id.clone(),
        });
    }
    Ok(())
}
