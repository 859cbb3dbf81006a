use serde::Serialize;
use surv_model::{DiseaseCase, Severity};

/// One slice of the severity pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
    pub color: &'static str,
}

/// Counts per severity, always three buckets in mild, moderate, severe order.
pub fn severity_distribution(cases: &[DiseaseCase]) -> Vec<SeverityCount> {
    Severity::ALL
        .iter()
        .map(|severity| SeverityCount {
            severity: *severity,
            count: cases.iter().filter(|case| case.severity == *severity).count(),
            color: severity.color(),
        })
        .collect()
}
