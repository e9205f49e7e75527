/// Convenience result type used across Cardstack.
pub type CardstackResult<T> = Result<T, CardstackError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardstackError {
    /// Invalid user-provided stack or viewport data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving card placement for a viewport.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while evaluating per-card visual state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardstackError {
    /// Build a [`CardstackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardstackError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`CardstackError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CardstackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
