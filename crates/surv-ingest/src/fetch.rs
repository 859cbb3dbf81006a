//! Raw CSV retrieval.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use surv_model::CsvSource;

use crate::error::{IngestError, Result};

const CLIENT_USER_AGENT: &str = concat!("surv/", env!("CARGO_PKG_VERSION"));

/// Performs a blocking GET and returns the body as text.
pub fn fetch_csv_text(url: &str, timeout: Duration) -> Result<String> {
    let fetch_error = |source: reqwest::Error| IngestError::Fetch {
        url: url.to_string(),
        source,
    };
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_error)?;
    let response = client
        .get(url)
        .header(USER_AGENT, CLIENT_USER_AGENT)
        .header(ACCEPT, "text/csv, text/plain, */*")
        .send()
        .map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let text = response.text().map_err(fetch_error)?;
    debug!(url, bytes = text.len(), "fetched csv");
    Ok(text)
}

/// Reads CSV text from a URL or a local file.
pub fn read_csv_source(source: &CsvSource, timeout: Duration) -> Result<String> {
    match source {
        CsvSource::Url(url) => fetch_csv_text(url, timeout),
        CsvSource::File(path) => std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        }),
    }
}
