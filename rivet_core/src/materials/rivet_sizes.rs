//! Standard Rivet Sizes
//!
//! The catalog of manufacturable rivet diameters, 1/16" through 1/4" in
//! 1/32" steps, and rounding of an ideal diameter to the closest stock size.
//!
//! ## Rounding
//!
//! The closest size wins. When a target sits exactly halfway between two
//! sizes the smaller one is chosen, since the catalog is scanned in ascending
//! order and a later candidate must be strictly closer to replace it.
//!
//! ```rust
//! use rivet_core::materials::RivetSize;
//!
//! assert_eq!(RivetSize::nearest(0.3), RivetSize::D1_4);
//! assert_eq!(RivetSize::nearest(0.203125), RivetSize::D3_16);
//! ```

use serde::{Deserialize, Serialize};

/// Standard rivet diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum RivetSize {
    /// 1/16" (0.0625")
    #[serde(rename = "1/16")]
    D1_16,
    /// 3/32" (0.09375")
    #[serde(rename = "3/32")]
    D3_32,
    /// 1/8" (0.125")
    #[serde(rename = "1/8")]
    D1_8,
    /// 5/32" (0.15625")
    #[serde(rename = "5/32")]
    D5_32,
    /// 3/16" (0.1875")
    #[serde(rename = "3/16")]
    D3_16,
    /// 7/32" (0.21875")
    #[serde(rename = "7/32")]
    D7_32,
    /// 1/4" (0.25")
    #[serde(rename = "1/4")]
    D1_4,
}

impl RivetSize {
    /// All standard sizes, smallest first. Rounding depends on this order.
    pub const ALL: [RivetSize; 7] = [
        RivetSize::D1_16,
        RivetSize::D3_32,
        RivetSize::D1_8,
        RivetSize::D5_32,
        RivetSize::D3_16,
        RivetSize::D7_32,
        RivetSize::D1_4,
    ];

    /// Diameter in inches
    pub fn diameter_in(&self) -> f64 {
        match self {
            RivetSize::D1_16 => 1.0 / 16.0,
            RivetSize::D3_32 => 3.0 / 32.0,
            RivetSize::D1_8 => 1.0 / 8.0,
            RivetSize::D5_32 => 5.0 / 32.0,
            RivetSize::D3_16 => 3.0 / 16.0,
            RivetSize::D7_32 => 7.0 / 32.0,
            RivetSize::D1_4 => 1.0 / 4.0,
        }
    }

    /// Fractional designation (e.g., "5/32\"")
    pub fn display_name(&self) -> &'static str {
        match self {
            RivetSize::D1_16 => "1/16\"",
            RivetSize::D3_32 => "3/32\"",
            RivetSize::D1_8 => "1/8\"",
            RivetSize::D5_32 => "5/32\"",
            RivetSize::D3_16 => "3/16\"",
            RivetSize::D7_32 => "7/32\"",
            RivetSize::D1_4 => "1/4\"",
        }
    }

    /// Round a target diameter (inches) to the closest standard size.
    ///
    /// Never fails. Ties go to the smaller size; a NaN target compares false
    /// against everything and so yields the first entry.
    pub fn nearest(target_in: f64) -> Self {
        let mut best = Self::ALL[0];
        let mut best_diff = (best.diameter_in() - target_in).abs();
        for size in Self::ALL.iter().skip(1) {
            let diff = (size.diameter_in() - target_in).abs();
            if diff < best_diff {
                best = *size;
                best_diff = diff;
            }
        }
        tracing::trace!(target_in, chosen = %best, "rounded rivet diameter");
        best
    }
}

impl std::fmt::Display for RivetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Round a target diameter (inches) to the closest standard diameter (inches)
pub fn nearest_rivet_size(target_in: f64) -> f64 {
    RivetSize::nearest(target_in).diameter_in()
}
