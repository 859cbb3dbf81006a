//! Dashboard state: raw records, the current filter and the derived view.
//!
//! Loads are ticketed. Only the completion for the most recent
//! [`CasePipeline::begin_load`] is applied; earlier ones are dropped, so a
//! slow response cannot overwrite a newer selection.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info_span};

use surv_ingest::load_surveillance_cases;
use surv_mock::MockSource;
use surv_model::{
    CaseFilter, Disease, DiseaseCase, LoaderOptions, SurveillanceCase, SurveillanceFilter,
};
use surv_transform::aggregate::{
    CaseSummary, SeverityCount, SurveillanceSummary, SymptomFrequency, case_age_distribution,
    case_summary, case_symptom_frequency, cases_by_date_dense, cases_by_date_sparse,
    comorbidity_frequency, rank_municipalities, rank_regions, rank_ufs, severity_distribution,
    surveillance_age_distribution, surveillance_summary, surveillance_symptom_frequency,
    top_symptoms,
};
use surv_transform::{CategoryCount, DatePoint, RecordFilter, RegionRanking, apply_filters};

/// Rows shown by the compact symptom chart.
pub const TOP_SYMPTOMS: usize = 5;

/// Identifies one outstanding load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns a record set, its filter and the filtered view.
#[derive(Debug, Clone)]
pub struct CasePipeline<F: RecordFilter> {
    records: Vec<F::Record>,
    filter: F,
    view: Vec<F::Record>,
    loading: bool,
    generation: u64,
}

impl<F: RecordFilter> CasePipeline<F> {
    /// A pipeline waiting for its first load.
    pub fn new(filter: F) -> Self {
        Self {
            records: Vec::new(),
            filter,
            view: Vec::new(),
            loading: true,
            generation: 0,
        }
    }

    /// Marks a load as outstanding and supersedes any earlier ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Replaces the record set. Returns false when `ticket` was superseded.
    pub fn complete_load(&mut self, ticket: LoadTicket, records: Vec<F::Record>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "ignoring superseded load"
            );
            return false;
        }
        self.records = records;
        self.loading = false;
        self.recompute();
        true
    }

    /// Ends a failed load with an empty record set.
    pub fn abandon_load(&mut self, ticket: LoadTicket) -> bool {
        self.complete_load(ticket, Vec::new())
    }

    /// Replaces the filter as a whole and recomputes the view.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.recompute();
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn records(&self) -> &[F::Record] {
        &self.records
    }

    /// The records accepted by the current filter.
    pub fn view(&self) -> &[F::Record] {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    fn recompute(&mut self) {
        self.view = apply_filters(&self.records, &self.filter);
    }
}

/// Every generic-case chart for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseCharts {
    pub summary: CaseSummary,
    pub timeline: Vec<DatePoint>,
    pub severity: Vec<SeverityCount>,
    pub ages: Vec<CategoryCount>,
    pub symptoms: Vec<SymptomFrequency>,
    pub top_symptoms: Vec<SymptomFrequency>,
    pub regions: Vec<RegionRanking>,
}

impl CaseCharts {
    pub fn compute(cases: &[DiseaseCase], today: NaiveDate) -> Self {
        let span = info_span!("aggregate", record_count = cases.len());
        let _guard = span.enter();
        let symptoms = case_symptom_frequency(cases);
        Self {
            summary: case_summary(cases),
            timeline: cases_by_date_dense(cases, today),
            severity: severity_distribution(cases),
            ages: case_age_distribution(cases),
            top_symptoms: top_symptoms(symptoms.clone(), TOP_SYMPTOMS),
            symptoms,
            regions: rank_regions(cases),
        }
    }
}

/// Every surveillance chart for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveillanceCharts {
    pub summary: SurveillanceSummary,
    pub timeline: Vec<DatePoint>,
    pub ages: Vec<CategoryCount>,
    pub symptoms: Vec<SymptomFrequency>,
    pub top_symptoms: Vec<SymptomFrequency>,
    pub comorbidities: Vec<SymptomFrequency>,
    pub municipalities: Vec<RegionRanking>,
    pub ufs: Vec<RegionRanking>,
}

impl SurveillanceCharts {
    pub fn compute(cases: &[SurveillanceCase], current_year: i32) -> Self {
        let span = info_span!("aggregate", record_count = cases.len());
        let _guard = span.enter();
        let symptoms = surveillance_symptom_frequency(cases);
        Self {
            summary: surveillance_summary(cases),
            timeline: cases_by_date_sparse(cases),
            ages: surveillance_age_distribution(cases, current_year),
            top_symptoms: top_symptoms(symptoms.clone(), TOP_SYMPTOMS),
            symptoms,
            comorbidities: comorbidity_frequency(cases),
            municipalities: rank_municipalities(cases),
            ufs: rank_ufs(cases),
        }
    }
}

/// Generic dashboard backed by the mock source.
#[derive(Debug, Clone)]
pub struct DiseaseDashboard {
    disease: Disease,
    source: MockSource,
    pipeline: CasePipeline<CaseFilter>,
}

impl DiseaseDashboard {
    /// Creates the dashboard without loading; call [`Self::refresh`].
    pub fn new(disease: Disease, source: MockSource) -> Self {
        Self {
            disease,
            source,
            pipeline: CasePipeline::new(CaseFilter::new()),
        }
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn pipeline(&self) -> &CasePipeline<CaseFilter> {
        &self.pipeline
    }

    pub fn set_filter(&mut self, filter: CaseFilter) {
        self.pipeline.set_filter(filter);
    }

    /// Switches disease, discarding the current records and generating a
    /// fresh batch.
    pub fn select_disease(&mut self, disease: Disease, today: NaiveDate) {
        self.disease = disease;
        self.refresh(today);
    }

    pub fn refresh(&mut self, today: NaiveDate) {
        let ticket = self.pipeline.begin_load();
        let cases = self.source.fetch(self.disease, today);
        self.pipeline.complete_load(ticket, cases);
    }

    pub fn charts(&self, today: NaiveDate) -> CaseCharts {
        CaseCharts::compute(self.pipeline.view(), today)
    }
}

/// Surveillance dashboard backed by the CSV feed.
#[derive(Debug, Clone)]
pub struct SurveillanceDashboard {
    options: LoaderOptions,
    pipeline: CasePipeline<SurveillanceFilter>,
}

impl SurveillanceDashboard {
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            pipeline: CasePipeline::new(SurveillanceFilter::new()),
        }
    }

    pub fn pipeline(&self) -> &CasePipeline<SurveillanceFilter> {
        &self.pipeline
    }

    pub fn set_filter(&mut self, filter: SurveillanceFilter) {
        self.pipeline.set_filter(filter);
    }

    /// Loads the feed. Failures leave an empty record set.
    pub fn load(&mut self) {
        let ticket = self.pipeline.begin_load();
        let cases = load_surveillance_cases(&self.options);
        self.pipeline.complete_load(ticket, cases);
    }

    pub fn charts(&self, current_year: i32) -> SurveillanceCharts {
        SurveillanceCharts::compute(self.pipeline.view(), current_year)
    }
}
