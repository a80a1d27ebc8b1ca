//! # Input Parsing
//!
//! Turns what the user typed at a prompt into numbers.
//!
//! - Dimensions (thickness, length, width) are arithmetic expressions,
//!   see [`crate::expression`].
//! - Multipliers are written as a multiple of rivet diameter with a
//!   trailing `D`: `2D`, `4d`, `2.5 D`.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::input::{parse_dimension, parse_multiplier};
//!
//! assert_eq!(parse_multiplier("4D").unwrap(), 4.0);
//! assert_eq!(parse_multiplier(" 2.5 d ").unwrap(), 2.5);
//! assert!(parse_multiplier("4").is_err());
//!
//! assert_eq!(parse_dimension("12 + 1/2").unwrap(), 12.5);
//! ```

use crate::errors::{RivetError, RivetResult};
use crate::expression;
use crate::units::UnitSystem;

const MULTIPLIER_FORMAT: &str = "Multiplier must be entered in the format '2D', '4D', etc.";

/// Parse a multiplier such as `4D` into its numeric value.
pub fn parse_multiplier(text: &str) -> RivetResult<f64> {
    let normalized = text.trim().to_uppercase().replace(' ', "");
    let number = normalized
        .strip_suffix('D')
        .ok_or_else(|| RivetError::format(text, MULTIPLIER_FORMAT))?;
    number
        .parse::<f64>()
        .map_err(|_| RivetError::format(text, format!("could not convert '{}' to a number", number)))
}

/// Check that a value can be fed to the layout calculator: finite and positive.
pub fn require_positive(field: &str, value: f64) -> RivetResult<f64> {
    if !value.is_finite() {
        return Err(RivetError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(RivetError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Evaluate a dimension expression as entered, without unit conversion.
pub fn parse_dimension(text: &str) -> RivetResult<f64> {
    expression::evaluate(text)
}

/// Evaluate a dimension expression and convert it to inches.
pub fn parse_dimension_in(text: &str, units: UnitSystem) -> RivetResult<f64> {
    parse_dimension(text).map(|value| units.to_inches(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_forms() {
        assert_eq!(parse_multiplier("2D").unwrap(), 2.0);
        assert_eq!(parse_multiplier("4d").unwrap(), 4.0);
        assert_eq!(parse_multiplier("  3.5D ").unwrap(), 3.5);
        assert_eq!(parse_multiplier("2 D").unwrap(), 2.0);
        assert_eq!(parse_multiplier("1 0D").unwrap(), 10.0);
    }

    #[test]
    fn test_multiplier_requires_marker() {
        let err = parse_multiplier("4").unwrap_err();
        assert_eq!(err.error_code(), "FORMAT_ERROR");
        assert!(err.to_string().contains("'2D', '4D'"));
        assert!(parse_multiplier("4X").is_err());
        assert!(parse_multiplier("").is_err());
    }

    #[test]
    fn test_multiplier_requires_number() {
        assert!(parse_multiplier("D").is_err());
        assert!(parse_multiplier("twoD").is_err());
        // Multipliers are plain numbers, not expressions
        assert!(parse_multiplier("2+2D").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("length", 2.5).unwrap(), 2.5);
        let err = require_positive("length", 0.0).unwrap_err();
        assert_eq!(err, RivetError::invalid_input("length", "0", "Value must be positive"));
        assert!(require_positive("length", -3.0).is_err());
        assert!(require_positive("length", f64::INFINITY).is_err());
        assert!(require_positive("length", f64::NAN).is_err());
    }

    #[test]
    fn test_dimension_expressions() {
        assert_eq!(parse_dimension("3+2/8").unwrap(), 3.25);
        assert!(parse_dimension("3 inches").is_err());
    }

    #[test]
    fn test_dimension_unit_conversion() {
        assert_eq!(parse_dimension_in("10", UnitSystem::Inches).unwrap(), 10.0);
        let inches = parse_dimension_in("254", UnitSystem::Millimeters).unwrap();
        assert!((inches - 10.0).abs() < 1e-12);
        let inches = parse_dimension_in("2*25.4", UnitSystem::Millimeters).unwrap();
        assert!((inches - 2.0).abs() < 1e-12);
    }
}
