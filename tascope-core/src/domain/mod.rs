//! Domain types for the analysis engine.

pub mod bar;
pub mod record;
pub mod series;
pub mod timeframe;

pub use bar::Bar;
pub use record::PriceRecord;
pub use series::Series;
pub use timeframe::Timeframe;
