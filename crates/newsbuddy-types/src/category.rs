use crate::error::ProgressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed article category enumeration.
///
/// The reader UI also offers an "All" filter; that is a filter sentinel, not
/// a category an article can belong to, so it has no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Science,
    World,
    Health,
    Environment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Science,
        Category::World,
        Category::Health,
        Category::Environment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Science => "Science",
            Self::World => "World",
            Self::Health => "Health",
            Self::Environment => "Environment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ProgressError;

    /// Case-insensitive match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ProgressError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Technology".parse::<Category>(), Ok(Category::Technology));
        assert_eq!(" science ".parse::<Category>(), Ok(Category::Science));
        assert_eq!(
            "All".parse::<Category>(),
            Err(ProgressError::UnknownCategory("All".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
