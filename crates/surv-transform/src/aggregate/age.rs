use surv_model::{DiseaseCase, SurveillanceCase};

use super::CategoryCount;

/// Decade buckets with an open-ended last bucket.
pub const AGE_BUCKETS: [&str; 8] = [
    "0-9", "10-19", "20-29", "30-39", "40-49", "50-59", "60-69", "70+",
];

fn bucket_index(age: u32) -> usize {
    (age / 10).min(AGE_BUCKETS.len() as u32 - 1) as usize
}

fn histogram(ages: impl Iterator<Item = u32>) -> Vec<CategoryCount> {
    let mut counts = [0usize; AGE_BUCKETS.len()];
    for age in ages {
        counts[bucket_index(age)] += 1;
    }
    AGE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(label, count)| CategoryCount {
            label: (*label).to_string(),
            count,
        })
        .collect()
}

/// Histogram of generic case ages. Cases without an age are skipped.
pub fn case_age_distribution(cases: &[DiseaseCase]) -> Vec<CategoryCount> {
    histogram(cases.iter().filter_map(|case| case.age))
}

/// Histogram of ages derived from the birth year.
///
/// Birth years are parsed leniently (`"1990"`, `"1990.0"`); missing,
/// unparseable and future birth years are skipped.
pub fn surveillance_age_distribution(
    cases: &[SurveillanceCase],
    current_year: i32,
) -> Vec<CategoryCount> {
    histogram(
        cases
            .iter()
            .filter_map(|case| age_from_birth_year(case.ano_nascimento.as_deref()?, current_year)),
    )
}

fn age_from_birth_year(raw: &str, current_year: i32) -> Option<u32> {
    let year = raw.trim().parse::<f64>().ok()?;
    if !year.is_finite() {
        return None;
    }
    let age = f64::from(current_year) - year.floor();
    if age < 0.0 {
        return None;
    }
    Some(age as u32)
}
