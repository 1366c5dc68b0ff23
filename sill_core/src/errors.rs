//! # Error Types
//!
//! Structured error types for sill_core. Near-singular denominators are not
//! errors at this level: they surface as
//! [`FormulaResult::Undefined`](crate::calculations::drop_sill::FormulaResult)
//! in the result structure so one failed formula never aborts the rest of
//! the evaluation. `CalcError` is reserved for inputs the engine cannot
//! accept at all.
//!
//! ## Example
//!
//! ```rust
//! use sill_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(hk: f64) -> CalcResult<()> {
//!     if hk < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "hk",
//!             hk.to_string(),
//!             "Depth cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sill_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by any consumer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative depth, non-finite number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
