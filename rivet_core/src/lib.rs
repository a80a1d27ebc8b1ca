//! # rivet_core - Rivet Layout Calculation Engine
//!
//! `rivet_core` sizes and spaces a single perimeter row of rivets on a
//! rectangular sheet, then answers plain-language questions about the
//! result. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The calculation is a pure, total function
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for everything that parses user text
//!
//! ## Quick Start
//!
//! ```rust
//! use rivet_core::calculations::{calculate, LayoutInput};
//! use rivet_core::explain::explain;
//! use rivet_core::input::{parse_dimension, parse_multiplier};
//!
//! let input = LayoutInput {
//!     length: parse_dimension("10").unwrap(),
//!     width: parse_dimension("4 + 1").unwrap(),
//!     thickness: parse_dimension("1/10").unwrap(),
//!     spacing_multiplier: parse_multiplier("4D").unwrap(),
//!     edge_multiplier: parse_multiplier("2D").unwrap(),
//! };
//! input.validate().unwrap();
//!
//! let result = calculate(&input);
//! assert_eq!(explain(&result, "total rivets?"), "Total rivets = 26");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Layout calculation
//! - [`materials`] - Standard rivet size catalog and rounding
//! - [`explain`] - Keyword-routed answers about a layout
//! - [`session`] - Ordered, append-only store of layouts
//! - [`input`] - Multiplier and dimension parsing
//! - [`expression`] - Arithmetic expression evaluator
//! - [`units`] - Inch/millimeter handling
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod explain;
pub mod expression;
pub mod input;
pub mod materials;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, rivet_layout, LayoutInput, LayoutResult};
pub use errors::{RivetError, RivetResult};
pub use materials::{nearest_rivet_size, RivetSize};
pub use session::Session;
pub use units::UnitSystem;
