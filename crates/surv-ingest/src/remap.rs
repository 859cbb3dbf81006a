//! Header remapping from the notification form to [`SurveillanceCase`].

use sha2::Digest;
use tracing::{debug, warn};

use surv_model::{SurveillanceCase, SurveillanceField};

use crate::csv_table::{CsvTable, read_csv_text};
use crate::error::Result;

/// Column positions of the known fields present in a table.
#[derive(Debug, Clone)]
pub struct HeaderMapping {
    columns: Vec<(SurveillanceField, usize)>,
    unmapped: Vec<String>,
}

impl HeaderMapping {
    pub fn from_table(table: &CsvTable) -> Self {
        let columns: Vec<(SurveillanceField, usize)> = SurveillanceField::ALL
            .iter()
            .filter_map(|field| table.column_index(field.header()).map(|idx| (*field, idx)))
            .collect();
        let unmapped = table
            .headers
            .iter()
            .filter(|header| SurveillanceField::from_header(header).is_none())
            .cloned()
            .collect();
        Self { columns, unmapped }
    }

    pub fn mapped_count(&self) -> usize {
        self.columns.len()
    }

    /// Source headers that have no counterpart field.
    pub fn unmapped_headers(&self) -> &[String] {
        &self.unmapped
    }

    fn apply(&self, row: &[String], record_id: String) -> SurveillanceCase {
        let mut case = SurveillanceCase {
            record_id,
            ..SurveillanceCase::default()
        };
        for (field, idx) in &self.columns {
            let value = row.get(*idx).filter(|value| !value.is_empty()).cloned();
            case.set(*field, value);
        }
        case
    }
}

/// Deterministic identifier: hex of the first 8 bytes of
/// sha256("<source_id>\0<record_number>").
pub fn derive_record_id(source_id: &str, record_number: u64) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(record_number.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    hex::encode(&digest[..8])
}

/// Remaps a parsed table into surveillance cases.
pub fn remap_table(table: &CsvTable, source_id: &str) -> Vec<SurveillanceCase> {
    let mapping = HeaderMapping::from_table(table);
    if mapping.mapped_count() == 0 && !table.headers.is_empty() {
        warn!(
            header_count = table.headers.len(),
            "no known surveillance headers in source"
        );
    }
    if !mapping.unmapped_headers().is_empty() {
        debug!(unmapped = ?mapping.unmapped_headers(), "ignoring unmapped headers");
    }
    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| mapping.apply(row, derive_record_id(source_id, idx as u64 + 1)))
        .collect()
}

/// Parses CSV text and remaps it in one step.
pub fn parse_surveillance_csv(text: &str, source_id: &str) -> Result<Vec<SurveillanceCase>> {
    let table = read_csv_text(text)?;
    Ok(remap_table(&table, source_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_deterministic() {
        let a = derive_record_id("dengue.csv", 1);
        let b = derive_record_id("dengue.csv", 1);
        let c = derive_record_id("dengue.csv", 2);
        let d = derive_record_id("zika.csv", 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn mapping_reports_unknown_headers() {
        let table = read_csv_text("Sexo,Coluna Extra\nF,x\n").expect("read csv");
        let mapping = HeaderMapping::from_table(&table);
        assert_eq!(mapping.mapped_count(), 1);
        assert_eq!(mapping.unmapped_headers(), ["Coluna Extra".to_string()]);
    }
}
