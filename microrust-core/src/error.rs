use thiserror::Error;

/// Custom error type for the MicroRust framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroRustError {
    #[error("Invalid exponent for pow: {exponent} is not a finite real number")]
    InvalidExponent { exponent: f64 },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Internal error: {0}")]
    InternalError(String),
}
