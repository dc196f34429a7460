//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during checked polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Remainder by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// A coefficient or power left the range of its integer type
    #[error("Arithmetic overflow during {operation}")]
    Overflow { operation: &'static str },

    /// I/O error while writing a polynomial to a sink
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PolynomialError {
    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}
