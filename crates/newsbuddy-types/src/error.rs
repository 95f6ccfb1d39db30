#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Malformed completion input. The mutation is refused and the prior
    /// snapshot stays current.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("invalid rules: {0}")]
    InvalidRules(String),
}

impl ProgressError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_rules(reason: impl Into<String>) -> Self {
        Self::InvalidRules(reason.into())
    }
}
