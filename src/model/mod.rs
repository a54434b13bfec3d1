pub mod scheme;
pub mod series;
pub mod units;

pub use scheme::Scheme;
pub use series::{DeltaSeries, IndexDomain, MeasurementSeries, ScaledSeries, TransformError};
pub use units::Unit;
