//! Component traits.
//!
//! The indicator trait and the container for precomputed numeric series.

pub mod indicator;

pub use indicator::{Indicator, IndicatorValues};
