use crate::category::Category;
use crate::error::ProgressError;
use crate::ids::BadgeId;
use crate::rules::{FIRST_READ_COUNT, FIVE_READS_COUNT, TECH_WHIZ_COUNT, TEN_READS_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const FIRST_READ: &str = "first-read";
pub const FIVE_READS: &str = "five-reads";
pub const TEN_READS: &str = "ten-reads";
pub const PERFECT_QUIZ: &str = "perfect-quiz";
pub const TECH_WHIZ: &str = "tech-whiz";

/// Display data for an unlockable badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Badge {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: BadgeId::new(id),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// Unlock condition for a badge, checked against the post-completion
/// snapshot and the completion event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeRule {
    /// Exactly `count` distinct articles completed.
    CompletedExactly { count: usize },
    /// At least `count` distinct articles completed.
    CompletedAtLeast { count: usize },
    /// The completing quiz had questions and all were answered correctly.
    PerfectQuiz,
    /// At least `count` distinct articles completed under `category`.
    CategoryAtLeast { category: Category, count: usize },
}

/// A catalog entry: the badge plus the rule that unlocks it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    #[serde(flatten)]
    pub badge: Badge,
    pub rule: BadgeRule,
}

/// Process-wide badge configuration. Loaded once, read-only thereafter.
///
/// Badge ids are unique within a catalog; [`BadgeCatalog::new`] and
/// deserialization both reject duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BadgeDefinition>", into = "Vec<BadgeDefinition>")]
pub struct BadgeCatalog {
    definitions: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(definitions: Vec<BadgeDefinition>) -> Result<Self, ProgressError> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if !seen.insert(&def.badge.id) {
                return Err(ProgressError::invalid_rules(format!(
                    "duplicate badge id '{}'",
                    def.badge.id
                )));
            }
            match def.rule {
                BadgeRule::CompletedExactly { count: 0 }
                | BadgeRule::CompletedAtLeast { count: 0 }
                | BadgeRule::CategoryAtLeast { count: 0, .. } => {
                    return Err(ProgressError::invalid_rules(format!(
                        "badge '{}' has a zero count threshold",
                        def.badge.id
                    )));
                }
                _ => {}
            }
        }
        Ok(Self { definitions })
    }

    /// The five reader badges shipped with the app.
    pub fn standard() -> Self {
        let definitions = vec![
            BadgeDefinition {
                badge: Badge::new(FIRST_READ, "First Step", "Read your first article!", "🌟"),
                rule: BadgeRule::CompletedExactly {
                    count: FIRST_READ_COUNT,
                },
            },
            BadgeDefinition {
                badge: Badge::new(FIVE_READS, "Bookworm", "Read 5 articles!", "🐛"),
                rule: BadgeRule::CompletedAtLeast {
                    count: FIVE_READS_COUNT,
                },
            },
            BadgeDefinition {
                badge: Badge::new(TEN_READS, "Scholar", "Read 10 articles!", "🎓"),
                rule: BadgeRule::CompletedAtLeast {
                    count: TEN_READS_COUNT,
                },
            },
            BadgeDefinition {
                badge: Badge::new(
                    PERFECT_QUIZ,
                    "Quiz Master",
                    "Get a perfect score on a quiz!",
                    "🎯",
                ),
                rule: BadgeRule::PerfectQuiz,
            },
            BadgeDefinition {
                badge: Badge::new(TECH_WHIZ, "Tech Whiz", "Read 3 technology articles!", "💻"),
                rule: BadgeRule::CategoryAtLeast {
                    category: Category::Technology,
                    count: TECH_WHIZ_COUNT,
                },
            },
        ];
        Self { definitions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.definitions.iter()
    }

    pub fn get(&self, id: &BadgeId) -> Option<&BadgeDefinition> {
        self.definitions.iter().find(|def| &def.badge.id == id)
    }

    /// Display data for `id`, if the catalog knows it.
    pub fn badge(&self, id: &BadgeId) -> Option<&Badge> {
        self.get(id).map(|def| &def.badge)
    }

    pub fn contains(&self, id: &BadgeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<BadgeDefinition>> for BadgeCatalog {
    type Error = ProgressError;

    fn try_from(definitions: Vec<BadgeDefinition>) -> Result<Self, Self::Error> {
        Self::new(definitions)
    }
}

impl From<BadgeCatalog> for Vec<BadgeDefinition> {
    fn from(catalog: BadgeCatalog) -> Self {
        catalog.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_its_own_validation() {
        let standard = BadgeCatalog::standard();
        let rebuilt = BadgeCatalog::new(standard.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(standard.len(), 5);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let def = BadgeDefinition {
            badge: Badge::new("x", "X", "x", "*"),
            rule: BadgeRule::PerfectQuiz,
        };
        let err = BadgeCatalog::new(vec![def.clone(), def]).unwrap_err();
        assert_eq!(
            err,
            ProgressError::InvalidRules("duplicate badge id 'x'".to_string())
        );
    }

    #[test]
    fn zero_thresholds_are_rejected() {
        let def = BadgeDefinition {
            badge: Badge::new("none", "None", "never", "-"),
            rule: BadgeRule::CompletedAtLeast { count: 0 },
        };
        assert!(BadgeCatalog::new(vec![def]).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = BadgeCatalog::standard();
        let badge = catalog.badge(&BadgeId::from(TECH_WHIZ)).unwrap();
        assert_eq!(badge.name, "Tech Whiz");
        assert!(!catalog.contains(&BadgeId::from("night-owl")));
    }

    #[test]
    fn definition_serializes_flat_with_tagged_rule() {
        let def = BadgeDefinition {
            badge: Badge::new("science-fan", "Science Fan", "Read 3 science articles!", "*"),
            rule: BadgeRule::CategoryAtLeast {
                category: Category::Science,
                count: 3,
            },
        };

        insta::assert_json_snapshot!(def, @r#"
        {
          "id": "science-fan",
          "name": "Science Fan",
          "description": "Read 3 science articles!",
          "icon": "*",
          "rule": {
            "kind": "category_at_least",
            "category": "Science",
            "count": 3
          }
        }
        "#);
    }
}
