use thiserror::Error;

/// Errors produced by the scoring engine.
///
/// Scoring fails only when a monetary field is not a well-formed decimal.
/// Validated input never reaches these cases; callers treat them as internal
/// faults and must not surface a partial point total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("not a valid decimal amount: {0:?}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
