//! Integration tests for the dashboard pipeline.

use std::io::Write;
use std::time::Duration;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use surv_cli::pipeline::{CasePipeline, DiseaseDashboard, SurveillanceDashboard};
use surv_mock::MockSource;
use surv_model::{
    CaseFilter, CaseStatus, CsvSource, Disease, DiseaseCase, GeneratorOptions, LoaderOptions,
    Severity, SurveillanceFilter,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn case(id: &str, severity: Severity) -> DiseaseCase {
    DiseaseCase {
        id: id.to_string(),
        name: None,
        age: Some(40),
        gender: None,
        region: "Nordeste - Bahia".to_string(),
        date: today(),
        status: CaseStatus::Active,
        severity,
        symptoms: Vec::new(),
    }
}

fn seeded_source(count: usize, seed: u64) -> MockSource {
    MockSource::new(
        GeneratorOptions::new()
            .with_count(count)
            .with_latency(Duration::ZERO)
            .with_seed(Some(seed)),
    )
}

#[test]
fn new_pipeline_starts_loading_and_empty() {
    let pipeline: CasePipeline<CaseFilter> = CasePipeline::new(CaseFilter::new());
    assert!(pipeline.is_loading());
    assert!(pipeline.records().is_empty());
    assert!(pipeline.view().is_empty());
}

#[test]
fn completing_a_load_derives_the_view() {
    let mut pipeline = CasePipeline::new(CaseFilter::new().with_severity(Severity::Severe));
    let ticket = pipeline.begin_load();
    let applied = pipeline.complete_load(
        ticket,
        vec![case("A", Severity::Severe), case("B", Severity::Mild)],
    );
    assert!(applied);
    assert!(!pipeline.is_loading());
    assert_eq!(pipeline.records().len(), 2);
    assert_eq!(pipeline.view().len(), 1);

    pipeline.set_filter(CaseFilter::new());
    assert_eq!(pipeline.view().len(), 2);
    pipeline.set_filter(CaseFilter::new().with_search("b"));
    assert_eq!(pipeline.view()[0].id, "B");
}

#[test]
fn superseded_load_is_ignored() {
    let mut pipeline = CasePipeline::new(CaseFilter::new());
    let first = pipeline.begin_load();
    let second = pipeline.begin_load();

    assert!(!pipeline.complete_load(first, vec![case("OLD", Severity::Mild)]));
    assert!(pipeline.is_loading());
    assert!(pipeline.records().is_empty());

    assert!(pipeline.complete_load(second, vec![case("NEW", Severity::Mild)]));
    assert_eq!(pipeline.view()[0].id, "NEW");

    // A late completion after the current one must not overwrite it.
    assert!(!pipeline.complete_load(first, vec![case("OLD", Severity::Mild)]));
    assert_eq!(pipeline.records()[0].id, "NEW");
}

#[test]
fn abandoned_load_leaves_an_empty_set() {
    let mut pipeline = CasePipeline::new(CaseFilter::new());
    let ticket = pipeline.begin_load();
    pipeline.complete_load(ticket, vec![case("A", Severity::Mild)]);

    let retry = pipeline.begin_load();
    assert!(pipeline.abandon_load(retry));
    assert!(!pipeline.is_loading());
    assert!(pipeline.records().is_empty());
    assert!(pipeline.view().is_empty());
}

#[test]
fn severe_filter_over_generated_dengue_batch() {
    let mut dashboard = DiseaseDashboard::new(Disease::Dengue, seeded_source(1_000, 77));
    dashboard.refresh(today());
    let records = dashboard.pipeline().records();
    assert_eq!(records.len(), 1_000);
    let severe = records
        .iter()
        .filter(|case| case.severity == Severity::Severe)
        .count();

    dashboard.set_filter(CaseFilter::new().with_severity(Severity::Severe));
    assert_eq!(dashboard.pipeline().view().len(), severe);

    let charts = dashboard.charts(today());
    assert_eq!(charts.summary.total, severe);
    assert_eq!(charts.summary.severe, severe);
    assert_eq!(charts.timeline.len(), 30);
    assert_eq!(charts.top_symptoms.len(), 5);
}

#[test]
fn selecting_a_disease_regenerates_records() {
    let mut dashboard = DiseaseDashboard::new(Disease::Dengue, seeded_source(20, 3));
    dashboard.refresh(today());
    assert!(dashboard.pipeline().records()[0].id.starts_with("DENGUE-"));

    dashboard.set_filter(CaseFilter::new().with_status(CaseStatus::Active));
    dashboard.select_disease(Disease::FebreAmarela, today());
    assert_eq!(dashboard.disease(), Disease::FebreAmarela);
    assert_eq!(dashboard.pipeline().records().len(), 20);
    assert!(
        dashboard
            .pipeline()
            .records()
            .iter()
            .all(|case| case.id.starts_with("FEBRE_AMARELA-"))
    );
    // The filter survives the switch.
    assert!(
        dashboard
            .pipeline()
            .view()
            .iter()
            .all(|case| case.status == CaseStatus::Active)
    );
}

const CSV: &str = "\
UF da Notificação,Município da Notificação,Data de Notificação,Ano de Nascimento,Febre,Hospitalização,Data do Óbito
SP,Campinas,2025-01-10,1990,Sim,Sim,
SP,Santos,2025-01-11,2001,Sim,Não,
BA,Salvador,2025-01-11,1950,Não,Sim,2025-01-20
";

#[test]
fn surveillance_dashboard_loads_and_filters_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CSV.as_bytes()).unwrap();
    let options = LoaderOptions::new().with_source(CsvSource::File(file.path().to_path_buf()));

    let mut dashboard = SurveillanceDashboard::new(options);
    assert!(dashboard.pipeline().is_loading());
    dashboard.load();
    assert!(!dashboard.pipeline().is_loading());
    assert_eq!(dashboard.pipeline().records().len(), 3);

    let charts = dashboard.charts(2025);
    assert_eq!(charts.summary.total, 3);
    assert_eq!(charts.summary.hospitalized, 2);
    assert_eq!(charts.summary.deaths, 1);
    assert_eq!(charts.summary.ufs, 2);
    assert_eq!(charts.timeline.len(), 2);
    assert_eq!(charts.ufs[0].label, "SP");
    assert_eq!(charts.symptoms[0].label, "Febre");
    assert_eq!(charts.symptoms[0].count, 2);

    dashboard.set_filter(SurveillanceFilter::new().with_uf("SP").with_hospitalization("Sim"));
    let view = dashboard.pipeline().view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].municipio_notificacao.as_deref(), Some("Campinas"));
}

#[test]
fn surveillance_dashboard_survives_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let options =
        LoaderOptions::new().with_source(CsvSource::File(dir.path().join("absent.csv")));
    let mut dashboard = SurveillanceDashboard::new(options);
    dashboard.load();
    assert!(!dashboard.pipeline().is_loading());
    assert!(dashboard.pipeline().records().is_empty());
    assert_eq!(dashboard.charts(2025).summary.total, 0);
}
