use newsbuddy_types::{ArticleId, BadgeId, Category};

/// Describes a specific progress invariant violation.
///
/// Snapshot checks (stale level, unknown badge) apply to any single
/// `UserProgress`; transition checks compare a snapshot with its successor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressViolation {
    /// `level` does not equal the level derived from `xp`.
    StaleLevel { xp: u64, expected: u64, actual: u64 },
    /// A held badge is not in the badge catalog.
    UnknownBadge { badge_id: BadgeId },
    /// XP went down between two snapshots.
    XpDecreased { before: u64, after: u64 },
    /// XP changed although no new article was completed.
    XpWithoutNewArticle { before: u64, after: u64 },
    /// A completed article disappeared from the completed set.
    ArticleForgotten { article_id: ArticleId },
    /// A completed article's recorded category changed.
    CategoryChanged {
        article_id: ArticleId,
        before: Category,
        after: Category,
    },
    /// A held badge disappeared.
    BadgeRevoked { badge_id: BadgeId },
}

/// Errors produced when adopting an externally supplied snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("inconsistent snapshot: {}", join_violations(.0))]
    Inconsistent(Vec<ProgressViolation>),
}

fn join_violations(violations: &[ProgressViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl std::fmt::Display for ProgressViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaleLevel {
                xp,
                expected,
                actual,
            } => write!(
                f,
                "level {actual} is stale for {xp} xp: expected level {expected}"
            ),
            Self::UnknownBadge { badge_id } => {
                write!(f, "badge '{badge_id}' is not in the badge catalog")
            }
            Self::XpDecreased { before, after } => {
                write!(f, "xp decreased from {before} to {after}")
            }
            Self::XpWithoutNewArticle { before, after } => write!(
                f,
                "xp changed from {before} to {after} without a new completed article"
            ),
            Self::ArticleForgotten { article_id } => {
                write!(f, "completed article '{article_id}' was removed")
            }
            Self::CategoryChanged {
                article_id,
                before,
                after,
            } => write!(
                f,
                "completed article '{article_id}' changed category from {before} to {after}"
            ),
            Self::BadgeRevoked { badge_id } => write!(f, "badge '{badge_id}' was revoked"),
        }
    }
}
