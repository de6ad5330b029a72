//! Solver error types.

/// Errors raised while parsing or solving a puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// A line could not be parsed.
    #[error("malformed input on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl PuzzleError {
    /// Error for the zero-based line index `idx`.
    pub(crate) fn malformed(idx: usize, reason: impl Into<String>) -> Self {
        PuzzleError::Malformed { line: idx + 1, reason: reason.into() }
    }
}
