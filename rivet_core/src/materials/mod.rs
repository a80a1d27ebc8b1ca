//! # Materials Database
//!
//! Stock fastener definitions. Currently this is the fixed catalog of
//! standard solid rivet diameters.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::materials::{nearest_rivet_size, RivetSize};
//!
//! // 3 x 0.04" sheet = 0.12" ideal diameter, nearest stock size is 1/8"
//! assert_eq!(RivetSize::nearest(0.12), RivetSize::D1_8);
//! assert_eq!(nearest_rivet_size(0.12), 0.125);
//! ```

pub mod rivet_sizes;

pub use rivet_sizes::{nearest_rivet_size, RivetSize};
