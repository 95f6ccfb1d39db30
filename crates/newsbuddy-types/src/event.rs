use crate::category::Category;
use crate::error::ProgressError;
use crate::ids::ArticleId;
use crate::quiz::QuizScore;
use serde::{Deserialize, Serialize};

/// Input to one progress transition: the reader finished an article's quiz.
///
/// Ephemeral. The engine stores its effects, not the event, unless the
/// caller keeps a [`crate::CompletionJournal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub article_id: ArticleId,
    pub category: Category,
    pub quiz: QuizScore,
}

impl CompletionEvent {
    /// Build an event from raw UI input.
    ///
    /// Returns `Err(InvalidInput)` for an empty or blank article id.
    pub fn new(
        article_id: impl Into<String>,
        category: Category,
        quiz: QuizScore,
    ) -> Result<Self, ProgressError> {
        Ok(Self {
            article_id: ArticleId::new(article_id)?,
            category,
            quiz,
        })
    }
}
