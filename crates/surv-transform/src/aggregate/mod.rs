//! Chart-ready aggregations over a filtered record set.
//!
//! Every function is a pure computation over a slice and returns plain
//! serializable records. Empty input yields zero counts, never an error.

pub mod age;
pub mod regions;
pub mod severity;
pub mod summary;
pub mod symptoms;
pub mod timeline;

use chrono::NaiveDate;
use serde::Serialize;

pub use age::{AGE_BUCKETS, case_age_distribution, surveillance_age_distribution};
pub use regions::{RANKING_LIMIT, rank_municipalities, rank_regions, rank_ufs};
pub use severity::{SeverityCount, severity_distribution};
pub use summary::{CaseSummary, SurveillanceSummary, case_summary, share, surveillance_summary};
pub use symptoms::{
    SymptomFrequency, case_symptom_frequency, comorbidity_frequency,
    surveillance_symptom_frequency, top_symptoms,
};
pub use timeline::{TIMELINE_DAYS, cases_by_date_dense, cases_by_date_sparse};

/// A labelled count, the common shape of bar and pie charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// A count attached to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// A grouped location with its total and one highlighted sub-count
/// (severe cases or hospitalizations, depending on the record type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRanking {
    pub label: String,
    pub total: usize,
    pub flagged: usize,
}

impl RegionRanking {
    /// Flagged share of the total in percent, 0 when empty.
    pub fn flagged_share(&self) -> f64 {
        share(self.flagged, self.total)
    }
}
