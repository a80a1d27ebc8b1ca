//! # Layout Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rivet_layout`] - Perimeter rivet layout for a rectangular sheet

pub mod rivet_layout;

// Re-export commonly used types
pub use rivet_layout::{calculate, rivet_layout, LayoutInput, LayoutResult};
