//! Error type shared by every fallible entry point.
//!
//! All failures are structural (bad input), never transient, so they are
//! reported once before the evolutionary loop starts.

use std::fmt;

/// Errors reported by matrix construction and configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The distance table is not square, has a wrong element count, or
    /// contains negative, non-finite, or non-zero diagonal entries.
    MalformedMatrix(String),

    /// A numeric parameter is outside its accepted range.
    InvalidParameter(String),

    /// Fewer than two cities: crossover and mutation both need two
    /// distinct positions.
    DegenerateMatrix(usize),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::MalformedMatrix(msg) => write!(f, "malformed distance matrix: {msg}"),
            TspError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            TspError::DegenerateMatrix(n) => {
                write!(f, "degenerate distance matrix: {n} cities, at least 2 required")
            }
        }
    }
}

impl std::error::Error for TspError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
