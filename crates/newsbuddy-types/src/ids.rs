use crate::error::ProgressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an article supplied by the external article catalog.
///
/// Never empty or whitespace-only. The engine does not check that the id
/// exists in any catalog; it only tracks which ids were completed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(raw: impl Into<String>) -> Result<Self, ProgressError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ProgressError::invalid_input("article id must not be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArticleId {
    type Error = ProgressError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ArticleId> for String {
    fn from(id: ArticleId) -> Self {
        id.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a badge in the badge catalog, e.g. `"first-read"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BadgeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_empty_and_blank() {
        assert!(matches!(
            ArticleId::new(""),
            Err(ProgressError::InvalidInput { .. })
        ));
        assert!(ArticleId::new("   ").is_err());
        assert_eq!(ArticleId::new("a-1").unwrap().as_str(), "a-1");
    }

    #[test]
    fn article_id_deserialization_goes_through_validation() {
        let ok: ArticleId = serde_json::from_str("\"news-7\"").unwrap();
        assert_eq!(ok.to_string(), "news-7");

        let err = serde_json::from_str::<ArticleId>("\"\"");
        assert!(err.is_err());
    }
}
