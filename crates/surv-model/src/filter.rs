//! Filter specifications.
//!
//! A filter is replaced as a whole on every interaction; the builder
//! methods below return a new value rather than mutating shared state.
//! An empty `search` and `None` predicates are inactive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{CaseStatus, Severity};

/// Filter over generated disease cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFilter {
    /// Case-insensitive substring over name, id and region.
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl CaseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.region.is_none()
            && self.status.is_none()
            && self.severity.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// Filter over surveillance notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillanceFilter {
    /// Case-insensitive substring over municipality, UF and health facility.
    #[serde(default)]
    pub search: String,
    /// Exact UF of notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    /// Exact municipality of notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    /// Exact hospitalization flag value (`Sim`, `Não`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<String>,
    /// Exact fever flag value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fever: Option<String>,
    /// Inclusive lower bound on the notification date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the notification date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl SurveillanceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_uf(mut self, uf: impl Into<String>) -> Self {
        self.uf = Some(uf.into());
        self
    }

    #[must_use]
    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }

    #[must_use]
    pub fn with_hospitalization(mut self, value: impl Into<String>) -> Self {
        self.hospitalization = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_fever(mut self, value: impl Into<String>) -> Self {
        self.fever = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.uf.is_none()
            && self.municipality.is_none()
            && self.hospitalization.is_none()
            && self.fever.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}
