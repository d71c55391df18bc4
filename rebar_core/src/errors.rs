//! # Error Types
//!
//! Structured error types for rebar_core. The engine is pure arithmetic,
//! so the taxonomy is deliberately narrow: bad inputs that violate the
//! caller contract (zero spacing, zero stock length) fail loudly here
//! rather than silently producing `Infinity`/`NaN` quantities.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_in: f64) -> CalcResult<()> {
//!     if spacing_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "spacing_in",
//!             spacing_in.to_string(),
//!             "Bar spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by UI layers and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates the engine's caller contract
    /// (zero/negative spacing, zero stock length, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation could not produce a meaningful result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
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

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
