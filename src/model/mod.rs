//! Types that make up the dashboard document, such as `CoreMetrics` and `FunderLimit`.
mod dashboard;
mod extended;
mod funder;
mod metrics;

pub use dashboard::{as_of_date, Dashboard};
pub use extended::{ExtendedMetrics, ExtendedScalars, MonthlyPoint};
pub use funder::{FunderDetail, FunderLimit};
pub use metrics::CoreMetrics;
