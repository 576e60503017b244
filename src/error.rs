//! Error types for the craps engine.
//!
//! The engine itself never fails once running: dice are produced in range by
//! construction. These errors surface only where values come from outside the
//! crate (hand-built dice, points, configuration) or through the checked
//! transition entry point.

use thiserror::Error;

/// Result type alias for craps engine operations.
pub type Result<T> = std::result::Result<T, CrapsError>;

/// Craps engine error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrapsError {
    #[error("invalid die face: {0} (must be 1-6)")]
    InvalidDie(u8),

    #[error("invalid dice total: {0} (must be 2-12)")]
    InvalidTotal(u8),

    #[error("invalid point: {0} (must be one of 4, 5, 6, 8, 9, 10)")]
    InvalidPoint(u8),

    #[error("point phase entered without an established point")]
    MissingPoint,

    #[error("configuration error: {0}")]
    Config(String),
}
