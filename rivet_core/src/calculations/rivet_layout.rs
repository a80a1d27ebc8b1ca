//! # Rivet Layout Calculation
//!
//! Lays out a single row of rivets around the perimeter of a rectangular
//! sheet.
//!
//! ## Method
//!
//! 1. Target diameter D = 3t, rounded to the nearest standard rivet size
//! 2. Edge distance e = (edge multiplier) x D
//! 3. Nominal pitch p = (spacing multiplier) x D
//! 4. Effective side = side - 2e
//! 5. Rivets per side n = max(1, floor(effective / p) + 1)
//! 6. Actual pitch = effective / (n - 1), or 0 when only one rivet fits
//! 7. Total = 2 n_length + 2 n_width - 4 (corner rivets shared)
//! 8. Shank length = t + 1/16"
//!
//! ## Assumptions
//!
//! - All lengths in inches (convert millimeters before calling)
//! - Rivets on the perimeter only, no interior rows
//! - No check that the edge distance fits on the sheet; a sheet narrower
//!   than two edge distances still yields one rivet per side
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::calculations::rivet_layout::{calculate, LayoutInput};
//!
//! let input = LayoutInput {
//!     length: 10.0,
//!     width: 5.0,
//!     thickness: 0.1,
//!     spacing_multiplier: 4.0,
//!     edge_multiplier: 2.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.chosen_diameter, 0.25);
//! assert_eq!(result.rivets_along_length, 10);
//! assert_eq!(result.rivets_along_width, 5);
//! assert_eq!(result.total_rivets, 26);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::RivetResult;
use crate::input::require_positive;
use crate::materials::RivetSize;

/// Ideal rivet diameter as a multiple of sheet thickness
pub const TARGET_DIAMETER_FACTOR: f64 = 3.0;

/// Shank allowance added to sheet thickness (inches).
///
/// Applied as-is even when the session works in millimeters.
pub const SHANK_ALLOWANCE_IN: f64 = 1.0 / 16.0;

/// Suggested minimum edge distance multiplier (2D)
pub const SUGGESTED_EDGE_MULTIPLIER: f64 = 2.0;

/// Suggested minimum spacing multiplier (4D)
pub const SUGGESTED_SPACING_MULTIPLIER: f64 = 4.0;

/// Input parameters for one sheet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 10.0,
///   "width": 5.0,
///   "thickness": 0.1,
///   "spacing_multiplier": 4.0,
///   "edge_multiplier": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Sheet length in inches
    pub length: f64,

    /// Sheet width in inches
    pub width: f64,

    /// Sheet thickness in inches
    pub thickness: f64,

    /// Rivet pitch as a multiple of rivet diameter (4.0 for "4D")
    pub spacing_multiplier: f64,

    /// Edge distance as a multiple of rivet diameter (2.0 for "2D")
    pub edge_multiplier: f64,
}

impl LayoutInput {
    /// Validate input parameters.
    ///
    /// [`calculate`] never calls this; it is total over any input and will
    /// happily produce meaningless numbers for zero or negative values.
    pub fn validate(&self) -> RivetResult<()> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("thickness", self.thickness),
            ("spacing_multiplier", self.spacing_multiplier),
            ("edge_multiplier", self.edge_multiplier),
        ];
        for (field, value) in fields {
            require_positive(field, value)?;
        }
        Ok(())
    }
}

/// Results from a rivet layout calculation.
///
/// Created once per sheet and never modified.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness": 0.1,
///   "target_diameter": 0.30000000000000004,
///   "chosen_diameter": 0.25,
///   "rivet_size": "1/4",
///   "edge_distance": 0.5,
///   "spacing_multiplier": 4.0,
///   "nominal_spacing": 1.0,
///   "effective_length": 9.0,
///   "effective_width": 4.0,
///   "actual_spacing_length": 1.0,
///   "actual_spacing_width": 1.0,
///   "rivets_along_length": 10,
///   "rivets_along_width": 5,
///   "total_rivets": 26,
///   "recommended_length": 0.1625
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Sheet thickness (in)
    pub thickness: f64,

    /// Ideal diameter 3t before rounding (in)
    pub target_diameter: f64,

    /// Standard diameter actually used (in)
    pub chosen_diameter: f64,

    /// Catalog entry for `chosen_diameter`
    pub rivet_size: RivetSize,

    /// Distance from sheet edge to rivet centers (in)
    pub edge_distance: f64,

    /// Spacing multiplier as entered
    pub spacing_multiplier: f64,

    /// Requested pitch (in)
    pub nominal_spacing: f64,

    /// Length between the outermost rivet centers (in); may be negative
    pub effective_length: f64,

    /// Width between the outermost rivet centers (in); may be negative
    pub effective_width: f64,

    /// Even pitch along the length (in), 0 when one rivet
    pub actual_spacing_length: f64,

    /// Even pitch along the width (in), 0 when one rivet
    pub actual_spacing_width: f64,

    /// Rivets along one long edge, corners included (>= 1)
    pub rivets_along_length: u64,

    /// Rivets along one short edge, corners included (>= 1)
    pub rivets_along_width: u64,

    /// Rivets on the whole perimeter, corners counted once
    pub total_rivets: u64,

    /// Recommended shank length (in)
    pub recommended_length: f64,
}

impl LayoutResult {
    /// True when either side could only fit a single rivet.
    ///
    /// The perimeter formula undercounts in this case (a 1 x 1 layout
    /// reports zero rivets).
    pub fn is_degenerate(&self) -> bool {
        self.rivets_along_length == 1 || self.rivets_along_width == 1
    }

    /// Human-readable report, lengths to 4 decimals and counts as integers
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Sheet thickness:          {:.4}", self.thickness),
            format!("Target rivet diameter:    {:.4}", self.target_diameter),
            format!("Chosen rivet diameter:    {:.4} ({})", self.chosen_diameter, self.rivet_size),
            format!("Edge distance:            {:.4}", self.edge_distance),
            format!("Nominal spacing:          {:.4}", self.nominal_spacing),
            format!("Actual spacing (length):  {:.4}", self.actual_spacing_length),
            format!("Actual spacing (width):   {:.4}", self.actual_spacing_width),
            format!("Rivets along length:      {}", self.rivets_along_length),
            format!("Rivets along width:       {}", self.rivets_along_width),
            format!("Total rivets:             {}", self.total_rivets),
            format!("Recommended rivet length: {:.4}", self.recommended_length),
        ]
    }
}

/// Number of evenly spaced rivets that fit on an effective side, at least one.
fn rivets_along(effective: f64, nominal_spacing: f64) -> u64 {
    let fit = (effective / nominal_spacing).floor() + 1.0;
    // NaN and anything below one clamp to a single rivet
    if fit >= 1.0 {
        fit as u64
    } else {
        1
    }
}

fn actual_spacing(effective: f64, count: u64) -> f64 {
    if count > 1 {
        effective / (count - 1) as f64
    } else {
        0.0
    }
}

/// Calculate the rivet layout for one sheet.
///
/// Total: never fails, no validation. Call [`LayoutInput::validate`] first
/// when the values come from a user.
pub fn calculate(input: &LayoutInput) -> LayoutResult {
    let target_diameter = TARGET_DIAMETER_FACTOR * input.thickness;
    let rivet_size = RivetSize::nearest(target_diameter);
    let chosen_diameter = rivet_size.diameter_in();

    let edge_distance = input.edge_multiplier * chosen_diameter;
    let nominal_spacing = input.spacing_multiplier * chosen_diameter;

    let effective_length = input.length - 2.0 * edge_distance;
    let effective_width = input.width - 2.0 * edge_distance;

    let rivets_along_length = rivets_along(effective_length, nominal_spacing);
    let rivets_along_width = rivets_along(effective_width, nominal_spacing);

    let actual_spacing_length = actual_spacing(effective_length, rivets_along_length);
    let actual_spacing_width = actual_spacing(effective_width, rivets_along_width);

    // Corners shared by two sides; both counts are >= 1 so this never underflows
    let total_rivets = rivets_along_length
        .saturating_mul(2)
        .saturating_add(rivets_along_width.saturating_mul(2))
        - 4;

    let recommended_length = input.thickness + SHANK_ALLOWANCE_IN;

    debug!(
        thickness = input.thickness,
        diameter = %rivet_size,
        rivets_along_length,
        rivets_along_width,
        total_rivets,
        "calculated rivet layout"
    );

    LayoutResult {
        thickness: input.thickness,
        target_diameter,
        chosen_diameter,
        rivet_size,
        edge_distance,
        spacing_multiplier: input.spacing_multiplier,
        nominal_spacing,
        effective_length,
        effective_width,
        actual_spacing_length,
        actual_spacing_width,
        rivets_along_length,
        rivets_along_width,
        total_rivets,
        recommended_length,
    }
}

/// Positional form of [`calculate`].
pub fn rivet_layout(length: f64, width: f64, thickness: f64, spacing_multiplier: f64, edge_multiplier: f64) -> LayoutResult {
    calculate(&LayoutInput {
        length,
        width,
        thickness,
        spacing_multiplier,
        edge_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;

    fn test_sheet() -> LayoutInput {
        LayoutInput {
            length: 10.0,
            width: 5.0,
            thickness: 0.1,
            spacing_multiplier: 4.0,
            edge_multiplier: 2.0,
        }
    }

    #[test]
    fn test_reference_sheet() {
        let result = calculate(&test_sheet());

        assert!((result.target_diameter - 0.3).abs() < 1e-12);
        assert_eq!(result.chosen_diameter, 0.25);
        assert_eq!(result.rivet_size, RivetSize::D1_4);
        assert_eq!(result.edge_distance, 0.5);
        assert_eq!(result.nominal_spacing, 1.0);
        assert_eq!(result.effective_length, 9.0);
        assert_eq!(result.effective_width, 4.0);
        assert_eq!(result.rivets_along_length, 10);
        assert_eq!(result.rivets_along_width, 5);
        assert_eq!(result.actual_spacing_length, 1.0);
        assert_eq!(result.actual_spacing_width, 1.0);
        assert_eq!(result.total_rivets, 26);
        assert!((result.recommended_length - 0.1625).abs() < 1e-12);
        assert_eq!(result.spacing_multiplier, 4.0);
        assert!(!result.is_degenerate());
    }

    #[test]
    fn test_positional_form_matches() {
        assert_eq!(rivet_layout(10.0, 5.0, 0.1, 4.0, 2.0), calculate(&test_sheet()));
    }

    #[test]
    fn test_uneven_spacing_is_spread_evenly() {
        // t = 0.04 -> D = 0.12 -> 1/8"; e = 0.25, p = 0.5
        // effective length 12.5 - 0.5 = 12.0 -> 25 rivets at 0.5
        // effective width 3.3 - 0.5 = 2.8 -> floor(5.6) + 1 = 6 rivets at 0.56
        let result = rivet_layout(12.5, 3.3, 0.04, 4.0, 2.0);
        assert_eq!(result.rivet_size, RivetSize::D1_8);
        assert_eq!(result.rivets_along_length, 25);
        assert_eq!(result.rivets_along_width, 6);
        assert!((result.actual_spacing_width - 0.56).abs() < 1e-9);
        // Rounding the count down stretches the pitch, by less than one extra pitch
        assert!(result.actual_spacing_width >= result.nominal_spacing);
        assert!(result.actual_spacing_width < result.nominal_spacing * 2.0);
    }

    #[test]
    fn test_perimeter_identity() {
        for (length, width) in [(10.0, 5.0), (24.0, 24.0), (3.0, 48.0), (7.3, 2.9)] {
            let result = rivet_layout(length, width, 0.05, 5.0, 2.5);
            assert!(result.rivets_along_length >= 2 && result.rivets_along_width >= 2);
            assert_eq!(
                result.total_rivets,
                2 * result.rivets_along_length + 2 * result.rivets_along_width - 4
            );
        }
    }

    #[test]
    fn test_single_rivet_side_has_zero_spacing() {
        // Edge distances consume the whole width: 1.0 - 2 * 0.5 = 0
        let result = rivet_layout(10.0, 1.0, 0.1, 4.0, 2.0);
        assert_eq!(result.effective_width, 0.0);
        assert_eq!(result.rivets_along_width, 1);
        assert_eq!(result.actual_spacing_width, 0.0);
        assert_eq!(result.rivets_along_length, 10);
        // Formula applied without special-casing: 20 + 2 - 4
        assert_eq!(result.total_rivets, 18);
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_sheet_smaller_than_edge_distances() {
        // Negative effective dimensions clamp to one rivet per side
        let result = rivet_layout(0.5, 0.5, 0.1, 4.0, 2.0);
        assert!(result.effective_length < 0.0);
        assert_eq!(result.rivets_along_length, 1);
        assert_eq!(result.rivets_along_width, 1);
        assert_eq!(result.actual_spacing_length, 0.0);
        // Known undercount: a single rivet reports zero
        assert_eq!(result.total_rivets, 0);
    }

    #[test]
    fn test_rivet_size_matches_chosen_diameter() {
        for thickness in [0.01, 0.03, 0.05, 0.06, 0.07, 0.1, 1.0] {
            let result = rivet_layout(10.0, 5.0, thickness, 4.0, 2.0);
            assert_eq!(result.rivet_size.diameter_in(), result.chosen_diameter);
            assert_eq!(RivetSize::nearest(3.0 * thickness), result.rivet_size);
        }
    }

    #[test]
    fn test_shank_allowance_is_fixed_inches() {
        let result = rivet_layout(10.0, 5.0, 0.5, 4.0, 2.0);
        assert_eq!(result.recommended_length, 0.5 + 0.0625);
    }

    #[test]
    fn test_millimeter_entry_matches_inches() {
        let units = UnitSystem::Millimeters;
        let from_mm = rivet_layout(
            units.to_inches(10.25 * 25.4),
            units.to_inches(4.75 * 25.4),
            units.to_inches(0.08 * 25.4),
            4.0,
            2.0,
        );
        let from_in = rivet_layout(10.25, 4.75, 0.08, 4.0, 2.0);

        assert!((from_mm.thickness - from_in.thickness).abs() < 1e-9);
        assert_eq!(from_mm.chosen_diameter, from_in.chosen_diameter);
        assert!((from_mm.effective_length - from_in.effective_length).abs() < 1e-9);
        assert!((from_mm.actual_spacing_width - from_in.actual_spacing_width).abs() < 1e-9);
        assert_eq!(from_mm.rivets_along_length, from_in.rivets_along_length);
        assert_eq!(from_mm.rivets_along_width, from_in.rivets_along_width);
        assert_eq!(from_mm.total_rivets, from_in.total_rivets);
    }

    #[test]
    fn test_infinite_spacing_clamps_to_one() {
        let result = rivet_layout(10.0, 5.0, 0.1, f64::INFINITY, 2.0);
        assert_eq!(result.rivets_along_length, 1);
        assert_eq!(result.rivets_along_width, 1);
    }

    #[test]
    fn test_validate() {
        assert!(test_sheet().validate().is_ok());

        let mut sheet = test_sheet();
        sheet.width = 0.0;
        let err = sheet.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("width"));

        let mut sheet = test_sheet();
        sheet.edge_multiplier = f64::NAN;
        assert!(sheet.validate().is_err());

        let mut sheet = test_sheet();
        sheet.thickness = -0.1;
        assert!(sheet.validate().is_err());
    }

    #[test]
    fn test_report_formatting() {
        let lines = calculate(&test_sheet()).report_lines();
        assert!(lines.iter().any(|l| l.ends_with("0.2500 (1/4\")")));
        assert!(lines.iter().any(|l| l.starts_with("Total rivets:") && l.ends_with(" 26")));
        assert!(lines.iter().any(|l| l.ends_with("0.1625")));
    }

    #[test]
    fn test_serialization() {
        let result = calculate(&test_sheet());
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"rivet_size\": \"1/4\""));
        let roundtrip: LayoutResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.rivet_size, RivetSize::D1_4);
        assert_eq!(roundtrip.chosen_diameter, 0.25);
        assert_eq!(roundtrip.total_rivets, 26);
    }
}
