//! Mock disease case generation.
//!
//! - **generator**: synthetic batches drawn from each disease profile
//! - **sampling**: cumulative-sum selection over discrete distributions
//! - **source**: latency-simulating front for the generator

pub mod generator;
pub mod sampling;
pub mod source;

pub use generator::{REGIONS, generate_cases, generate_symptoms};
pub use sampling::{pick_weighted, sample_weighted};
pub use source::MockSource;
