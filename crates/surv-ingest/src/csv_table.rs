use csv::ReaderBuilder;

use crate::error::Result;

/// Raw CSV contents keyed by the source header row.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|candidate| candidate == header)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parses CSV text whose first row is the header.
///
/// Rows with only blank cells are skipped. Short rows are padded with empty
/// cells so every row has one value per header.
pub fn read_csv_text(text: &str) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("\u{feff}  UF  da   Notificação "), "UF da Notificação");
    }

    #[test]
    fn blank_rows_are_skipped_and_short_rows_padded() {
        let table = read_csv_text("A,B,C\n1,2,3\n,,\n4\n").expect("read csv");
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["4", "", ""]);
        assert_eq!(table.column_index("C"), Some(2));
    }
}
