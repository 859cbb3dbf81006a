//! Per-disease lookup tables.
//!
//! Weights are ordered as [`CaseStatus::ALL`](crate::CaseStatus::ALL) and
//! [`Severity::ALL`](crate::Severity::ALL) and each triple sums to 1.0.

use crate::disease::Disease;

/// Symptoms shared by every disease.
pub const COMMON_SYMPTOMS: [&str; 3] = ["fever", "headache", "fatigue"];

/// Distribution and vocabulary used to synthesize cases for one disease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiseaseProfile {
    /// Probability of active, recovered, deceased.
    pub status_weights: [f64; 3],
    /// Probability of mild, moderate, severe.
    pub severity_weights: [f64; 3],
    /// Disease-specific symptom tags.
    pub symptom_vocabulary: &'static [&'static str],
    /// Typical monthly case volume for the procedural series.
    pub baseline_cases: f64,
}

const DENGUE: DiseaseProfile = DiseaseProfile {
    status_weights: [0.5, 0.45, 0.05],
    severity_weights: [0.6, 0.3, 0.1],
    symptom_vocabulary: &[
        "muscle_pain",
        "joint_pain",
        "rash",
        "eye_pain",
        "nausea",
        "vomiting",
    ],
    baseline_cases: 500.0,
};

const ZIKA: DiseaseProfile = DiseaseProfile {
    status_weights: [0.4, 0.59, 0.01],
    severity_weights: [0.8, 0.15, 0.05],
    symptom_vocabulary: &["rash", "joint_pain", "conjunctivitis", "muscle_pain"],
    baseline_cases: 200.0,
};

const CHIKUNGUNYA: DiseaseProfile = DiseaseProfile {
    status_weights: [0.45, 0.5, 0.05],
    severity_weights: [0.5, 0.4, 0.1],
    symptom_vocabulary: &["joint_pain", "muscle_pain", "rash", "headache"],
    baseline_cases: 300.0,
};

const MALARIA: DiseaseProfile = DiseaseProfile {
    status_weights: [0.6, 0.3, 0.1],
    severity_weights: [0.4, 0.4, 0.2],
    symptom_vocabulary: &["chills", "sweating", "nausea", "vomiting"],
    baseline_cases: 150.0,
};

const FEBRE_AMARELA: DiseaseProfile = DiseaseProfile {
    status_weights: [0.4, 0.4, 0.2],
    severity_weights: [0.3, 0.4, 0.3],
    symptom_vocabulary: &["jaundice", "abdominal_pain", "vomiting", "bleeding"],
    baseline_cases: 50.0,
};

impl Disease {
    pub fn profile(&self) -> &'static DiseaseProfile {
        match self {
            Disease::Dengue => &DENGUE,
            Disease::Zika => &ZIKA,
            Disease::Chikungunya => &CHIKUNGUNYA,
            Disease::Malaria => &MALARIA,
            Disease::FebreAmarela => &FEBRE_AMARELA,
        }
    }
}

impl DiseaseProfile {
    /// Common symptoms followed by the disease vocabulary, without repeats.
    pub fn symptom_pool(&self) -> Vec<&'static str> {
        let mut pool: Vec<&'static str> = COMMON_SYMPTOMS.to_vec();
        for symptom in self.symptom_vocabulary {
            if !pool.contains(symptom) {
                pool.push(*symptom);
            }
        }
        pool
    }
}

/// Symptom tag shown on the generic symptom chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const fn symptom(
    key: &'static str,
    label: &'static str,
    color: &'static str,
) -> SymptomDefinition {
    SymptomDefinition { key, label, color }
}

/// Tags tracked by the generic symptom-frequency chart.
pub const CASE_SYMPTOMS: [SymptomDefinition; 10] = [
    symptom("fever", "Febre", "#F03D3D"),
    symptom("headache", "Dor de cabeça", "#1AA4E0"),
    symptom("muscle_pain", "Dor muscular", "#0BB07B"),
    symptom("joint_pain", "Dor nas articulações", "#FFCE52"),
    symptom("rash", "Erupção cutânea", "#153983"),
    symptom("nausea", "Náusea", "#386488"),
    symptom("vomiting", "Vômito", "#66D1FF"),
    symptom("eye_pain", "Dor nos olhos", "#042363"),
    symptom("bleeding", "Sangramento", "#026899"),
    symptom("fatigue", "Fadiga", "#30B8F2"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        for disease in Disease::ALL {
            let profile = disease.profile();
            let status: f64 = profile.status_weights.iter().sum();
            let severity: f64 = profile.severity_weights.iter().sum();
            assert!((status - 1.0).abs() < 1e-9, "{disease} status weights");
            assert!((severity - 1.0).abs() < 1e-9, "{disease} severity weights");
        }
    }

    #[test]
    fn pool_deduplicates_shared_symptoms() {
        let pool = Disease::Chikungunya.profile().symptom_pool();
        assert_eq!(
            pool,
            vec!["fever", "headache", "fatigue", "joint_pain", "muscle_pain", "rash"]
        );
        assert_eq!(Disease::Dengue.profile().symptom_pool().len(), 9);
    }
}
