//! Filter engine.
//!
//! Filters are pure: the result is recomputed from the full record set on
//! each call, keeps the input order, and never contains a record that was
//! not in the input. All active predicates must hold (logical AND).

use std::fmt;

use surv_model::{CaseFilter, DiseaseCase, SurveillanceCase, SurveillanceFilter};
use tracing::{debug, debug_span};

use crate::dates::{parse_optional_date, within_range};

/// A filter specification that can be evaluated against one record type.
pub trait RecordFilter {
    type Record: Clone + fmt::Debug;

    fn matches(&self, record: &Self::Record) -> bool;

    /// True when no predicate is active and every record passes.
    fn is_empty(&self) -> bool;
}

/// Returns the records accepted by `filter`, in input order.
pub fn apply_filters<F: RecordFilter>(records: &[F::Record], filter: &F) -> Vec<F::Record> {
    let span = debug_span!("filter", input_count = records.len());
    let _guard = span.enter();
    if filter.is_empty() {
        debug!("no active predicate");
        return records.to_vec();
    }
    let kept: Vec<F::Record> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    debug!(kept_count = kept.len(), "filter applied");
    kept
}

/// Lower-cases the search term; `None` when the search is inactive.
fn search_needle(search: &str) -> Option<String> {
    if search.is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

fn contains_needle(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(needle))
}

fn equals_if_set(expected: Option<&str>, actual: Option<&str>) -> bool {
    match expected {
        Some(expected) => actual == Some(expected),
        None => true,
    }
}

impl RecordFilter for CaseFilter {
    type Record = DiseaseCase;

    fn is_empty(&self) -> bool {
        CaseFilter::is_empty(self)
    }

    fn matches(&self, record: &DiseaseCase) -> bool {
        if let Some(needle) = search_needle(&self.search) {
            let hit = contains_needle(record.name.as_deref(), &needle)
                || contains_needle(Some(record.id.as_str()), &needle)
                || contains_needle(Some(record.region.as_str()), &needle);
            if !hit {
                return false;
            }
        }
        if !equals_if_set(self.region.as_deref(), Some(record.region.as_str())) {
            return false;
        }
        if self.status.is_some_and(|status| status != record.status) {
            return false;
        }
        if self
            .severity
            .is_some_and(|severity| severity != record.severity)
        {
            return false;
        }
        within_range(Some(record.date), self.date_from, self.date_to)
    }
}

impl RecordFilter for SurveillanceFilter {
    type Record = SurveillanceCase;

    fn is_empty(&self) -> bool {
        SurveillanceFilter::is_empty(self)
    }

    fn matches(&self, record: &SurveillanceCase) -> bool {
        if let Some(needle) = search_needle(&self.search) {
            let hit = contains_needle(record.municipio_notificacao.as_deref(), &needle)
                || contains_needle(record.uf_notificacao.as_deref(), &needle)
                || contains_needle(record.unidade_saude.as_deref(), &needle);
            if !hit {
                return false;
            }
        }
        if !equals_if_set(self.uf.as_deref(), record.uf_notificacao.as_deref()) {
            return false;
        }
        if !equals_if_set(
            self.municipality.as_deref(),
            record.municipio_notificacao.as_deref(),
        ) {
            return false;
        }
        if !equals_if_set(
            self.hospitalization.as_deref(),
            record.hospitalizacao.as_deref(),
        ) {
            return false;
        }
        if !equals_if_set(self.fever.as_deref(), record.febre.as_deref()) {
            return false;
        }
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let date = parse_optional_date(record.data_notificacao.as_deref());
        within_range(date, self.date_from, self.date_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use surv_model::{CaseStatus, Severity};

    fn case(id: &str, region: &str, severity: Severity, day: u32) -> DiseaseCase {
        DiseaseCase {
            id: id.to_string(),
            name: Some("Maria Lima".to_string()),
            age: Some(30),
            gender: None,
            region: region.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            status: CaseStatus::Active,
            severity,
            symptoms: Vec::new(),
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let records = vec![
            case("DENGUE-10000", "Sudeste - São Paulo", Severity::Mild, 1),
            case("DENGUE-10001", "Sul - Paraná", Severity::Mild, 2),
        ];
        let by_region = apply_filters(&records, &CaseFilter::new().with_search("SÃO"));
        assert_eq!(by_region.len(), 1);
        let by_id = apply_filters(&records, &CaseFilter::new().with_search("10001"));
        assert_eq!(by_id[0].id, "DENGUE-10001");
        let by_name = apply_filters(&records, &CaseFilter::new().with_search("maria"));
        assert_eq!(by_name.len(), 2);
    }

    #[test]
    fn predicates_combine_with_and() {
        let records = vec![
            case("A", "Sul - Paraná", Severity::Severe, 1),
            case("B", "Sul - Paraná", Severity::Mild, 5),
            case("C", "Norte - Pará", Severity::Severe, 10),
        ];
        let filter = CaseFilter::new()
            .with_region("Sul - Paraná")
            .with_severity(Severity::Severe);
        let result = apply_filters(&records, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "A");

        let ranged = CaseFilter::new().with_date_range(
            NaiveDate::from_ymd_opt(2025, 3, 5),
            NaiveDate::from_ymd_opt(2025, 3, 10),
        );
        let ids: Vec<String> = apply_filters(&records, &ranged)
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec!["B", "C"]);
    }
}
