use crate::category::Category;
use crate::ids::{ArticleId, BadgeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single reader's achievement state. Persistence-level struct.
///
/// Plain data: the fields are public so storage adapters can serialize the
/// snapshot as a flat record, but only the progress engine produces new
/// snapshots. `level` is always derived from `xp`, `badges` only grows, and
/// each completed article keeps the category it was completed under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub level: u64,
    pub xp: u64,
    pub streak: u32,
    pub completed_articles: BTreeMap<ArticleId, Category>,
    pub badges: BTreeSet<BadgeId>,
}

impl UserProgress {
    /// Fresh session state: level 1, nothing earned.
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            streak: 0,
            completed_articles: BTreeMap::new(),
            badges: BTreeSet::new(),
        }
    }

    pub fn has_completed(&self, article_id: &ArticleId) -> bool {
        self.completed_articles.contains_key(article_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_articles.len()
    }

    /// Number of completed articles that were completed under `category`.
    pub fn completed_in(&self, category: Category) -> usize {
        self.completed_articles
            .values()
            .filter(|c| **c == category)
            .count()
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = &ArticleId> {
        self.completed_articles.keys()
    }

    pub fn has_badge(&self, badge_id: &BadgeId) -> bool {
        self.badges.contains(badge_id)
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(raw: &str) -> ArticleId {
        ArticleId::new(raw).unwrap()
    }

    #[test]
    fn fresh_progress_starts_at_level_one() {
        let progress = UserProgress::default();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp, 0);
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.completed_count(), 0);
        assert!(progress.badges.is_empty());
    }

    #[test]
    fn completed_in_counts_per_category() {
        let mut progress = UserProgress::new();
        progress
            .completed_articles
            .insert(article("a"), Category::Technology);
        progress
            .completed_articles
            .insert(article("b"), Category::Science);
        progress
            .completed_articles
            .insert(article("c"), Category::Technology);

        assert_eq!(progress.completed_in(Category::Technology), 2);
        assert_eq!(progress.completed_in(Category::Science), 1);
        assert_eq!(progress.completed_in(Category::Health), 0);
        assert!(progress.has_completed(&article("b")));
    }

    #[test]
    fn serialized_shape_is_a_flat_record() {
        let mut progress = UserProgress::new();
        progress.xp = 140;
        progress.streak = 1;
        progress
            .completed_articles
            .insert(article("a-1"), Category::World);
        progress.badges.insert(BadgeId::new("first-read"));

        insta::assert_json_snapshot!(progress, @r#"
        {
          "level": 1,
          "xp": 140,
          "streak": 1,
          "completed_articles": {
            "a-1": "World"
          },
          "badges": [
            "first-read"
          ]
        }
        "#);
    }
}
