//! # Unit Types
//!
//! Length handling for rivet layouts. The calculator works in inches
//! throughout; dimensions entered in millimeters are divided by 25.4 before
//! they reach it.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::units::{Inches, Millimeters, UnitSystem};
//!
//! let plate: Inches = Millimeters(254.0).into();
//! assert!((plate.0 - 10.0).abs() < 1e-12);
//!
//! let units = UnitSystem::from_choice("mm");
//! assert_eq!(units, UnitSystem::Millimeters);
//! assert!((units.to_inches(25.4) - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

impl Inches {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// Unit system the user enters sheet dimensions in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Inches,
    Millimeters,
}

impl UnitSystem {
    /// Interpret the user's unit choice.
    ///
    /// Only `inches` (case-insensitive) selects inches; every other token,
    /// including typos, selects millimeters.
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim().eq_ignore_ascii_case("inches") {
            UnitSystem::Inches
        } else {
            UnitSystem::Millimeters
        }
    }

    /// Divisor that turns a raw value in this system into inches
    pub fn factor(&self) -> f64 {
        match self {
            UnitSystem::Inches => 1.0,
            UnitSystem::Millimeters => MM_PER_INCH,
        }
    }

    /// Convert a raw value entered in this system to inches
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Inches => value,
            UnitSystem::Millimeters => Inches::from(Millimeters(value)).value(),
        }
    }

    /// Label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Inches => "inches",
            UnitSystem::Millimeters => "mm",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_inches() {
        let inches: Inches = Millimeters(50.8).into();
        assert!((inches.0 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_choice() {
        assert_eq!(UnitSystem::from_choice("inches"), UnitSystem::Inches);
        assert_eq!(UnitSystem::from_choice("  INCHES "), UnitSystem::Inches);
        assert_eq!(UnitSystem::from_choice("mm"), UnitSystem::Millimeters);
        // Anything else is millimeters, including "in"
        assert_eq!(UnitSystem::from_choice("in"), UnitSystem::Millimeters);
        assert_eq!(UnitSystem::from_choice(""), UnitSystem::Millimeters);
    }

    #[test]
    fn test_to_inches() {
        assert_eq!(UnitSystem::Inches.to_inches(3.25), 3.25);
        assert!((UnitSystem::Millimeters.to_inches(2.54) - 0.1).abs() < 1e-12);
        assert_eq!(UnitSystem::Millimeters.to_inches(127.0), 127.0 / UnitSystem::Millimeters.factor());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Inches(0.25)).unwrap();
        assert_eq!(json, "0.25");
        assert_eq!(serde_json::to_string(&UnitSystem::Millimeters).unwrap(), "\"millimeters\"");
    }
}
