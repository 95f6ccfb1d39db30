use crate::event::CompletionEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something that changed a reader's progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JournalEvent {
    /// An accepted completion.
    Completion(CompletionEvent),
    /// The calendar collaborator cleared the streak after a missed day.
    StreakReset,
}

impl From<CompletionEvent> for JournalEvent {
    fn from(event: CompletionEvent) -> Self {
        Self::Completion(event)
    }
}

/// A single progress change in the journal's append-only log.
///
/// Sequence is 0-indexed and equals the entry's position.
/// Timestamp is wall-clock for display only, NOT used in replay logic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    pub event: JournalEvent,
}

/// Ordered history of progress changes for one reader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionJournal {
    pub entries: Vec<JournalEntry>,
}

impl CompletionJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` at the next sequence number.
    pub fn append(
        &mut self,
        event: impl Into<JournalEvent>,
        timestamp: DateTime<Utc>,
    ) -> &JournalEntry {
        let sequence = self.entries.len() as u64;
        self.entries.push(JournalEntry {
            sequence,
            timestamp,
            event: event.into(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, QuizScore};

    #[test]
    fn append_assigns_positional_sequence() {
        let mut journal = CompletionJournal::new();
        for id in ["a", "b", "c"] {
            let event = CompletionEvent::new(id, Category::World, QuizScore::new(0.5)).unwrap();
            journal.append(event, Utc::now());
        }

        let sequences: Vec<u64> = journal.entries().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn journal_with_a_streak_reset_survives_json() {
        let mut journal = CompletionJournal::new();
        let event = CompletionEvent::new("a", Category::Science, QuizScore::new(f64::NAN)).unwrap();
        journal.append(event, Utc::now());
        journal.append(JournalEvent::StreakReset, Utc::now());

        let json = serde_json::to_string(&journal).unwrap();
        let restored: CompletionJournal = serde_json::from_str(&json).unwrap();
        similar_asserts::assert_eq!(restored, journal);
        assert_eq!(restored.entries()[1].event, JournalEvent::StreakReset);
    }
}
