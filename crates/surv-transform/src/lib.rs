//! Pure transformations over surveillance record sets.
//!
//! - **filter**: the [`RecordFilter`] trait and [`apply_filters`]
//! - **aggregate**: chart-ready counts and rankings
//! - **forecast**: procedural trend and forecast series
//! - **dates**: lenient date parsing shared by filters and aggregations

pub mod aggregate;
pub mod dates;
pub mod filter;
pub mod forecast;

pub use aggregate::{CategoryCount, DatePoint, RegionRanking};
pub use filter::{RecordFilter, apply_filters};
pub use forecast::{
    ComparisonRow, ForecastPoint, Insight, RiskLevel, TrendDirection, TrendPoint,
    disease_comparison, insights, predictive_series, seasonal_factor, trend_series,
};
