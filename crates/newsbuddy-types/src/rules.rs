use crate::badge::BadgeCatalog;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::sync::{Arc, LazyLock};

pub const XP_PER_ARTICLE: u64 = 100;
pub const XP_PER_QUIZ_CORRECT: u64 = 50;
pub const XP_FOR_LEVEL_UP: u64 = 500;

pub const FIRST_READ_COUNT: usize = 1;
pub const FIVE_READS_COUNT: usize = 5;
pub const TEN_READS_COUNT: usize = 10;
pub const TECH_WHIZ_COUNT: usize = 3;

const LEVEL_SPAN: NonZeroU64 = match NonZeroU64::new(XP_FOR_LEVEL_UP) {
    Some(span) => span,
    None => panic!("XP_FOR_LEVEL_UP must be non-zero"),
};

static STANDARD: LazyLock<Arc<ProgressRules>> =
    LazyLock::new(|| Arc::new(ProgressRules::default()));

/// XP math shared by the reducer and the level calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpSchedule {
    /// Granted once per article on first completion.
    pub per_article: u64,
    /// Scaled by the quiz fraction and rounded.
    pub per_quiz_correct: u64,
    /// XP span of one level.
    pub per_level: NonZeroU64,
}

impl Default for XpSchedule {
    fn default() -> Self {
        Self {
            per_article: XP_PER_ARTICLE,
            per_quiz_correct: XP_PER_QUIZ_CORRECT,
            per_level: LEVEL_SPAN,
        }
    }
}

impl XpSchedule {
    pub fn with_per_article(mut self, xp: u64) -> Self {
        self.per_article = xp;
        self
    }

    pub fn with_per_quiz_correct(mut self, xp: u64) -> Self {
        self.per_quiz_correct = xp;
        self
    }

    pub fn with_per_level(mut self, xp: NonZeroU64) -> Self {
        self.per_level = xp;
        self
    }
}

/// Static configuration for the progress engine: XP math plus the badge
/// catalog. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRules {
    #[serde(default)]
    pub xp: XpSchedule,
    #[serde(default)]
    pub badges: BadgeCatalog,
}

impl ProgressRules {
    pub fn new(xp: XpSchedule, badges: BadgeCatalog) -> Self {
        Self { xp, badges }
    }

    /// Shared default rules, built on first use.
    pub fn standard() -> Arc<ProgressRules> {
        Arc::clone(&STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_uses_the_shipped_constants() {
        let xp = XpSchedule::default();
        assert_eq!(xp.per_article, 100);
        assert_eq!(xp.per_quiz_correct, 50);
        assert_eq!(xp.per_level.get(), 500);
    }

    #[test]
    fn standard_rules_are_shared() {
        let a = ProgressRules::standard();
        let b = ProgressRules::standard();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, ProgressRules::default());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let rules: ProgressRules =
            serde_json::from_str(r#"{"xp":{"per_article":10,"per_quiz_correct":5,"per_level":20}}"#)
                .unwrap();
        assert_eq!(rules.xp.per_level.get(), 20);
        assert_eq!(rules.badges, BadgeCatalog::standard());
    }

    #[test]
    fn zero_level_span_is_rejected_on_load() {
        let err = serde_json::from_str::<XpSchedule>(
            r#"{"per_article":10,"per_quiz_correct":5,"per_level":0}"#,
        );
        assert!(err.is_err());
    }
}
