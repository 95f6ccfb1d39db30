pub mod badge;
pub mod category;
pub mod error;
pub mod event;
pub mod ids;
pub mod journal;
pub mod progress;
pub mod quiz;
pub mod rules;

pub use badge::{Badge, BadgeCatalog, BadgeDefinition, BadgeRule};
pub use category::Category;
pub use error::ProgressError;
pub use event::CompletionEvent;
pub use ids::{ArticleId, BadgeId};
pub use journal::{CompletionJournal, JournalEntry, JournalEvent};
pub use progress::UserProgress;
pub use quiz::QuizScore;
pub use rules::{
    ProgressRules, XP_FOR_LEVEL_UP, XP_PER_ARTICLE, XP_PER_QUIZ_CORRECT, XpSchedule,
};
