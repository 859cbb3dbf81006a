//! Synthetic case records.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use surv_model::{CaseStatus, Disease, DiseaseCase, Severity};

use crate::sampling::sample_weighted;

/// Twelve macro-region/state labels cases are spread over.
pub static REGIONS: [&str; 12] = [
    "Norte - Amazonas",
    "Norte - Pará",
    "Nordeste - Bahia",
    "Nordeste - Ceará",
    "Nordeste - Pernambuco",
    "Centro-Oeste - Goiás",
    "Centro-Oeste - Mato Grosso",
    "Sudeste - São Paulo",
    "Sudeste - Rio de Janeiro",
    "Sudeste - Minas Gerais",
    "Sul - Paraná",
    "Sul - Rio Grande do Sul",
];

static GENDERS: [&str; 2] = ["Masculino", "Feminino"];

static FIRST_NAMES: [&str; 10] = [
    "João", "Maria", "Pedro", "Ana", "Carlos", "Juliana", "Lucas", "Fernanda", "Rafael", "Mariana",
];

static LAST_NAMES: [&str; 10] = [
    "Silva",
    "Santos",
    "Oliveira",
    "Souza",
    "Pereira",
    "Lima",
    "Costa",
    "Rodrigues",
    "Almeida",
    "Nascimento",
];

/// Dates are drawn from `today - (WINDOW_DAYS - 1)` through `today`.
pub const WINDOW_DAYS: u64 = 30;

/// Identifiers start at this offset.
pub const ID_OFFSET: usize = 10_000;

/// Maximum number of symptom draws per case.
pub const MAX_SYMPTOMS: usize = 5;

/// Generates `count` cases for `disease`.
pub fn generate_cases<R: Rng>(
    disease: Disease,
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DiseaseCase> {
    let profile = disease.profile();
    let prefix = disease.id_prefix();
    (0..count)
        .map(|index| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
            let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();
            let offset = rng.random_range(0..WINDOW_DAYS);
            let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            let status = CaseStatus::ALL[sample_weighted(&profile.status_weights, rng)];
            let severity = Severity::ALL[sample_weighted(&profile.severity_weights, rng)];
            DiseaseCase {
                id: format!("{prefix}-{}", ID_OFFSET + index),
                name: Some(format!("{first} {last}")),
                age: Some(rng.random_range(1..=80)),
                gender: GENDERS.choose(rng).map(|gender| (*gender).to_string()),
                region: REGIONS.choose(rng).copied().unwrap_or_default().to_string(),
                date,
                status,
                severity,
                symptoms: generate_symptoms(disease, rng),
            }
        })
        .collect()
}

/// Picks between one and [`MAX_SYMPTOMS`] distinct tags.
///
/// A target count is drawn first and the pool is sampled with replacement;
/// repeats are dropped, so the realized count can fall below the target.
pub fn generate_symptoms<R: Rng>(disease: Disease, rng: &mut R) -> Vec<String> {
    let pool = disease.profile().symptom_pool();
    let target = rng.random_range(1..=MAX_SYMPTOMS);
    let mut selected: Vec<String> = Vec::with_capacity(target);
    for _ in 0..target {
        let Some(symptom) = pool.choose(rng).copied() else {
            break;
        };
        if !selected.iter().any(|existing| existing == symptom) {
            selected.push(symptom.to_string());
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn identifiers_follow_disease_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let cases = generate_cases(Disease::FebreAmarela, 3, today(), &mut rng);
        let ids: Vec<&str> = cases.iter().map(|case| case.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["FEBRE_AMARELA-10000", "FEBRE_AMARELA-10001", "FEBRE_AMARELA-10002"]
        );
    }

    #[test]
    fn zero_count_yields_empty_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_cases(Disease::Dengue, 0, today(), &mut rng).is_empty());
    }
}
