//! Series construction from stored daily history.

pub mod builder;

pub use builder::{aggregate, build_daily, build_series};
