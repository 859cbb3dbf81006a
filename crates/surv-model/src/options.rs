//! Configuration options for loading and generating case data.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public CSV export of dengue notifications.
pub const SURVEILLANCE_DATASET_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/DENGBR25_processed-qAKCsqCNa5zfoM7GcspCvbat2Mayq1.csv";

/// Where the surveillance CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvSource {
    Url(String),
    File(PathBuf),
}

impl CsvSource {
    /// Interprets `http://` and `https://` values as URLs, anything else as a path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CsvSource::Url(trimmed.to_string())
        } else {
            CsvSource::File(PathBuf::from(trimmed))
        }
    }

    /// Stable identifier used when deriving record ids.
    pub fn source_id(&self) -> String {
        match self {
            CsvSource::Url(url) => url.clone(),
            CsvSource::File(path) => path.display().to_string(),
        }
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        CsvSource::Url(SURVEILLANCE_DATASET_URL.to_string())
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_id())
    }
}

/// Options for the CSV loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderOptions {
    pub source: CsvSource,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            source: CsvSource::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self, source: CsvSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Options for the mock case generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Number of cases per batch.
    pub count: usize,
    /// Simulated network delay before the batch is returned.
    pub latency: Duration,
    /// Fixed RNG seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 1000,
            latency: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
