//! Error types for the simulation core and the scenario loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`Vector2D`](crate::Vector2D) arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised while loading a scenario description.
///
/// Loading is all-or-nothing: none of these leave a partially built universe behind.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// `line` is 1-based and refers to the raw input, blank lines included.
    #[error("malformed scenario at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

impl ScenarioError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ScenarioError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
