use serde::Serialize;
use surv_model::{
    CASE_SYMPTOMS, DiseaseCase, FlagDefinition, SURVEILLANCE_COMORBIDITIES,
    SURVEILLANCE_SYMPTOMS, SurveillanceCase,
};

use super::summary::share;

/// One bar of a symptom chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomFrequency {
    pub key: String,
    pub label: String,
    pub count: usize,
    /// Share of all records, rounded to one decimal.
    pub percentage: f64,
    pub color: String,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn frequency(key: &str, label: &str, color: &str, count: usize, total: usize) -> SymptomFrequency {
    SymptomFrequency {
        key: key.to_string(),
        label: label.to_string(),
        count,
        percentage: round_one_decimal(share(count, total)),
        color: color.to_string(),
    }
}

fn sort_descending(mut rows: Vec<SymptomFrequency>) -> Vec<SymptomFrequency> {
    // Stable: equal counts keep their definition order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn flag_frequency(cases: &[SurveillanceCase], flags: &[FlagDefinition]) -> Vec<SymptomFrequency> {
    let rows = flags
        .iter()
        .map(|flag| {
            let count = cases
                .iter()
                .filter(|case| case.is_affirmative(flag.field))
                .count();
            frequency(flag.field.key(), flag.label, flag.color, count, cases.len())
        })
        .collect();
    sort_descending(rows)
}

/// Affirmative counts for each tracked symptom flag, descending.
pub fn surveillance_symptom_frequency(cases: &[SurveillanceCase]) -> Vec<SymptomFrequency> {
    flag_frequency(cases, &SURVEILLANCE_SYMPTOMS)
}

/// Affirmative counts for each comorbidity flag, descending.
pub fn comorbidity_frequency(cases: &[SurveillanceCase]) -> Vec<SymptomFrequency> {
    flag_frequency(cases, &SURVEILLANCE_COMORBIDITIES)
}

/// Number of cases listing each tracked symptom tag, descending.
pub fn case_symptom_frequency(cases: &[DiseaseCase]) -> Vec<SymptomFrequency> {
    let rows = CASE_SYMPTOMS
        .iter()
        .map(|symptom| {
            let count = cases
                .iter()
                .filter(|case| case.has_symptom(symptom.key))
                .count();
            frequency(symptom.key, symptom.label, symptom.color, count, cases.len())
        })
        .collect();
    sort_descending(rows)
}

/// The first `limit` rows of an already sorted frequency list.
pub fn top_symptoms(mut rows: Vec<SymptomFrequency>, limit: usize) -> Vec<SymptomFrequency> {
    rows.truncate(limit);
    rows
}
