pub mod csv_table;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod remap;

pub use csv_table::{CsvTable, read_csv_text};
pub use error::{IngestError, Result};
pub use fetch::{fetch_csv_text, read_csv_source};
pub use loader::{load_surveillance_cases, try_load_surveillance_cases};
pub use remap::{HeaderMapping, derive_record_id, parse_surveillance_csv, remap_table};
pub use surv_model::SURVEILLANCE_DATASET_URL;
