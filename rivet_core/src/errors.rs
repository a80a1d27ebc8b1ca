//! # Error Types
//!
//! Structured error types for rivet_core. The layout calculation itself is
//! total and never fails; errors come from turning user text into numbers and
//! from checking those numbers before they reach the calculator.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::errors::{RivetError, RivetResult};
//!
//! fn require_positive(thickness: f64) -> RivetResult<()> {
//!     if thickness <= 0.0 {
//!         return Err(RivetError::invalid_input(
//!             "thickness",
//!             thickness.to_string(),
//!             "Thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_positive(-0.1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rivet_core operations
pub type RivetResult<T> = Result<T, RivetError>;

/// Structured error type for rivet layout operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RivetError {
    /// Text could not be parsed as a number, expression, or multiplier
    #[error("Invalid input '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A parsed value is outside the calculator's domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A query was made against a session with no layouts
    #[error("No layouts have been calculated yet")]
    SessionEmpty,

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Terminal read/write failure
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl RivetError {
    /// Create a Format error
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        RivetError::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RivetError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        RivetError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check whether asking the user again can fix this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RivetError::Format { .. } | RivetError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RivetError::Format { .. } => "FORMAT_ERROR",
            RivetError::InvalidInput { .. } => "INVALID_INPUT",
            RivetError::SessionEmpty => "SESSION_EMPTY",
            RivetError::SerializationError { .. } => "SERIALIZATION_ERROR",
            RivetError::Io { .. } => "IO_ERROR",
        }
    }
}

impl From<std::io::Error> for RivetError {
    fn from(err: std::io::Error) -> Self {
        RivetError::Io {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RivetError::format("4", "Multiplier must be entered in the format '2D', '4D', etc.");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Format\""));
        let roundtrip: RivetError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RivetError::format("x", "Invalid input").error_code(), "FORMAT_ERROR");
        assert_eq!(RivetError::invalid_input("width", "0", "Width must be positive").error_code(), "INVALID_INPUT");
        assert_eq!(RivetError::SessionEmpty.error_code(), "SESSION_EMPTY");
    }

    #[test]
    fn test_recoverable() {
        assert!(RivetError::format("abc", "Invalid input").is_recoverable());
        assert!(!RivetError::SessionEmpty.is_recoverable());
    }

    #[test]
    fn test_display() {
        let error = RivetError::format("3+", "Invalid input");
        assert_eq!(error.to_string(), "Invalid input '3+': Invalid input");
    }
}
