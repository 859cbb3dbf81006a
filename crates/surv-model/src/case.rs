//! Generic disease case records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SurvError;

/// Clinical outcome of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Recovered,
    Deceased,
}

impl CaseStatus {
    /// Ordered as the weights in [`crate::DiseaseProfile::status_weights`].
    pub const ALL: [CaseStatus; 3] = [
        CaseStatus::Active,
        CaseStatus::Recovered,
        CaseStatus::Deceased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Recovered => "recovered",
            CaseStatus::Deceased => "deceased",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Active => "Ativo",
            CaseStatus::Recovered => "Recuperado",
            CaseStatus::Deceased => "Óbito",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = SurvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(CaseStatus::Active),
            "recovered" => Ok(CaseStatus::Recovered),
            "deceased" => Ok(CaseStatus::Deceased),
            _ => Err(SurvError::UnknownStatus(s.to_string())),
        }
    }
}

/// Clinical severity of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Ordered as the weights in [`crate::DiseaseProfile::severity_weights`].
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Chart color token.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Mild => "hsl(var(--chart-3))",
            Severity::Moderate => "hsl(var(--chart-4))",
            Severity::Severe => "hsl(var(--chart-5))",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SurvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            _ => Err(SurvError::UnknownSeverity(s.to_string())),
        }
    }
}

/// A single disease case, either generated or supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseCase {
    /// Unique within one batch.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Free-form `"Macro-region - State"` label.
    pub region: String,
    pub date: NaiveDate,
    pub status: CaseStatus,
    pub severity: Severity,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl DiseaseCase {
    pub fn has_symptom(&self, key: &str) -> bool {
        self.symptoms.iter().any(|symptom| symptom == key)
    }
}
