//! Numeric helpers for geochronology data reduction: sample medians and
//! half-up rounding to a number of significant figures.

pub mod decimal;
pub mod math;
pub mod rounding;

// Re-export the primary operations for library users
pub use decimal::ExactDecimal;
pub use math::{median, percentile};
pub use rounding::{round_significant, round_significant_matrix, round_significant_slice};
