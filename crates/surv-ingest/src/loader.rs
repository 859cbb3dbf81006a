//! Single-shot loader for the surveillance feed.

use std::time::Instant;

use tracing::{error, info, info_span};

use surv_model::{LoaderOptions, SurveillanceCase};

use crate::error::Result;
use crate::fetch::read_csv_source;
use crate::remap::parse_surveillance_csv;

/// Fetches, parses and remaps the configured source.
pub fn try_load_surveillance_cases(options: &LoaderOptions) -> Result<Vec<SurveillanceCase>> {
    let text = read_csv_source(&options.source, options.timeout)?;
    parse_surveillance_csv(&text, &options.source.source_id())
}

/// Loads the configured source, degrading to an empty set on failure.
///
/// Fetch and parse errors are logged and never surfaced to the caller; no
/// retry is attempted and no partial result is kept.
pub fn load_surveillance_cases(options: &LoaderOptions) -> Vec<SurveillanceCase> {
    let span = info_span!("load", source = %options.source);
    let _guard = span.enter();
    let start = Instant::now();
    match try_load_surveillance_cases(options) {
        Ok(cases) => {
            info!(
                record_count = cases.len(),
                duration_ms = start.elapsed().as_millis(),
                "surveillance load complete"
            );
            cases
        }
        Err(err) => {
            error!(error = %err, "surveillance load failed");
            Vec::new()
        }
    }
}
