use std::collections::BTreeSet;

use serde::Serialize;
use surv_model::{CaseStatus, DiseaseCase, Severity, SurveillanceCase};

/// `part` as a percentage of `total`; 0 when `total` is 0.
pub fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Headline cards for the generic dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSummary {
    pub total: usize,
    pub active: usize,
    pub severe: usize,
    /// Distinct regions with at least one case.
    pub regions: usize,
    pub active_share: f64,
    pub severe_share: f64,
}

pub fn case_summary(cases: &[DiseaseCase]) -> CaseSummary {
    let total = cases.len();
    let active = cases
        .iter()
        .filter(|case| case.status == CaseStatus::Active)
        .count();
    let severe = cases
        .iter()
        .filter(|case| case.severity == Severity::Severe)
        .count();
    let regions = cases
        .iter()
        .map(|case| case.region.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    CaseSummary {
        total,
        active,
        severe,
        regions,
        active_share: share(active, total),
        severe_share: share(severe, total),
    }
}

/// Headline cards for the surveillance dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveillanceSummary {
    pub total: usize,
    pub hospitalized: usize,
    pub deaths: usize,
    pub ufs: usize,
    pub municipalities: usize,
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn surveillance_summary(cases: &[SurveillanceCase]) -> SurveillanceSummary {
    SurveillanceSummary {
        total: cases.len(),
        hospitalized: cases.iter().filter(|case| case.is_hospitalized()).count(),
        deaths: cases.iter().filter(|case| case.is_death()).count(),
        ufs: distinct(cases.iter().map(|case| case.uf_notificacao.as_deref())),
        municipalities: distinct(
            cases
                .iter()
                .map(|case| case.municipio_notificacao.as_deref()),
        ),
    }
}
