//! Library components of the `surv` dashboard.

pub mod logging;
pub mod pipeline;
