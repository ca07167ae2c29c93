//! Error types for class break computation
//!
//! Provides a unified error type for all classbreaks crates. The engine never
//! lets these escape `classify`; they travel between method implementations
//! and the dispatcher, which turns each one into a defined result.

use crate::method::Method;
use thiserror::Error;

/// Core error type for classification operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The cleaned sample has no elements
    #[error("Empty input: no numeric values left after cleaning")]
    EmptyInput,

    /// The method does not compute breaks (the caller supplies them)
    #[error("Unsupported method: {0} breaks are supplied by the caller")]
    UnsupportedMethod(Method),

    /// Method-specific undefined math
    #[error("Degenerate domain for {method}: {reason}")]
    DegenerateDomain { method: Method, reason: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data (unparseable names, colors)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a degenerate-domain error for a method
    pub fn degenerate(method: Method, reason: impl Into<String>) -> Self {
        Self::DegenerateDomain {
            method,
            reason: reason.into(),
        }
    }

    /// Create an error for a non-positive class count
    pub fn invalid_class_count(nb: i64) -> Self {
        Self::InvalidParameter(format!("class count {nb} must be at least 1"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether the engine recovers this error into the empty result
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::UnsupportedMethod(_) | Self::DegenerateDomain { .. }
        )
    }
}
