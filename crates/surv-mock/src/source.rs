use std::thread;
use std::time::Instant;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, info_span};

use surv_model::{Disease, DiseaseCase, GeneratorOptions};

use crate::generator::generate_cases;

/// Stand-in for a remote case API.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    options: GeneratorOptions,
}

impl MockSource {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Waits for the configured latency, then generates a batch dated
    /// relative to `today`.
    pub fn fetch(&self, disease: Disease, today: NaiveDate) -> Vec<DiseaseCase> {
        let span = info_span!("load", disease = %disease, count = self.options.count);
        let _guard = span.enter();
        if !self.options.latency.is_zero() {
            debug!(latency_ms = self.options.latency.as_millis(), "simulating latency");
            thread::sleep(self.options.latency);
        }
        let start = Instant::now();
        let cases = match self.options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_cases(disease, self.options.count, today, &mut rng)
            }
            None => generate_cases(disease, self.options.count, today, &mut rand::rng()),
        };
        info!(
            record_count = cases.len(),
            duration_ms = start.elapsed().as_millis(),
            "mock generation complete"
        );
        cases
    }
}
