use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span, trace};

use surv_cli::logging::redact_value;
use surv_cli::pipeline::{CaseCharts, DiseaseDashboard, SurveillanceCharts, SurveillanceDashboard};
use surv_mock::MockSource;
use surv_model::{
    CaseFilter, CsvSource, Disease, GeneratorOptions, LoaderOptions, MacroRegion,
    SurveillanceFilter,
};
use surv_transform::{
    ComparisonRow, ForecastPoint, Insight, TrendPoint, disease_comparison, insights,
    predictive_series, trend_series,
};

use crate::cli::{CasesArgs, InsightArgs, OutputArg, SeriesArgs, SurveillanceArgs};
use crate::summary::{
    print_case_dashboard, print_comparison, print_diseases, print_forecast, print_insight,
    print_surveillance_dashboard, print_trend,
};

#[derive(Serialize)]
struct CasesReport<'a> {
    disease: Disease,
    filter: &'a CaseFilter,
    record_count: usize,
    charts: &'a CaseCharts,
}

#[derive(Serialize)]
struct SurveillanceReport<'a> {
    source: String,
    filter: &'a SurveillanceFilter,
    record_count: usize,
    charts: &'a SurveillanceCharts,
}

#[derive(Serialize)]
struct SeriesReport<'a, T> {
    disease: Disease,
    region: MacroRegion,
    points: &'a [T],
}

pub fn run_cases(args: &CasesArgs, output: OutputArg) -> Result<()> {
    let span = info_span!("cases", disease = %args.disease);
    let _guard = span.enter();
    let options = GeneratorOptions::new()
        .with_count(args.count)
        .with_latency(Duration::from_millis(args.latency_ms))
        .with_seed(args.seed);
    let today = Local::now().date_naive();
    let mut dashboard = DiseaseDashboard::new(args.disease, MockSource::new(options));
    with_spinner(
        format!("Carregando casos de {}", args.disease.display_name()),
        || dashboard.refresh(today),
    );
    dashboard.set_filter(case_filter(args));
    let charts = dashboard.charts(today);
    info!(
        record_count = dashboard.pipeline().records().len(),
        view_count = dashboard.pipeline().view().len(),
        "cases dashboard ready"
    );
    match output {
        OutputArg::Json => print_json(&CasesReport {
            disease: dashboard.disease(),
            filter: dashboard.pipeline().filter(),
            record_count: dashboard.pipeline().view().len(),
            charts: &charts,
        }),
        OutputArg::Table => {
            print_case_dashboard(dashboard.disease(), &charts);
            Ok(())
        }
    }
}

fn case_filter(args: &CasesArgs) -> CaseFilter {
    let mut filter = CaseFilter::new().with_date_range(args.dates.from, args.dates.to);
    if let Some(search) = &args.search {
        filter = filter.with_search(search.as_str());
    }
    if let Some(region) = &args.region {
        filter = filter.with_region(region.as_str());
    }
    if let Some(status) = args.status {
        filter = filter.with_status(status);
    }
    if let Some(severity) = args.severity {
        filter = filter.with_severity(severity);
    }
    filter
}

pub fn run_surveillance(args: &SurveillanceArgs, output: OutputArg) -> Result<()> {
    let source = CsvSource::parse(&args.source);
    let span = info_span!("surveillance", source = %source);
    let _guard = span.enter();
    let options = LoaderOptions::new()
        .with_source(source.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let mut dashboard = SurveillanceDashboard::new(options);
    with_spinner("Carregando notificações".to_string(), || dashboard.load());
    dashboard.set_filter(surveillance_filter(args));

    for case in dashboard.pipeline().view() {
        trace!(
            record_id = %case.record_id,
            uf = redact_value(case.uf_notificacao.as_deref().unwrap_or_default()),
            municipio = redact_value(case.municipio_notificacao.as_deref().unwrap_or_default()),
            "record in view"
        );
    }

    let current_year = args.current_year.unwrap_or_else(|| Local::now().year());
    let charts = dashboard.charts(current_year);
    match output {
        OutputArg::Json => print_json(&SurveillanceReport {
            source: source.to_string(),
            filter: dashboard.pipeline().filter(),
            record_count: dashboard.pipeline().view().len(),
            charts: &charts,
        }),
        OutputArg::Table => {
            print_surveillance_dashboard(&source, &charts);
            Ok(())
        }
    }
}

fn surveillance_filter(args: &SurveillanceArgs) -> SurveillanceFilter {
    let mut filter = SurveillanceFilter::new().with_date_range(args.dates.from, args.dates.to);
    if let Some(search) = &args.search {
        filter = filter.with_search(search.as_str());
    }
    if let Some(uf) = &args.uf {
        filter = filter.with_uf(uf.as_str());
    }
    if let Some(municipality) = &args.municipality {
        filter = filter.with_municipality(municipality.as_str());
    }
    if let Some(value) = &args.hospitalization {
        filter = filter.with_hospitalization(value.as_str());
    }
    if let Some(value) = &args.fever {
        filter = filter.with_fever(value.as_str());
    }
    filter
}

pub fn run_trend(args: &SeriesArgs, output: OutputArg) -> Result<()> {
    let mut rng = series_rng(args.seed);
    let points: Vec<TrendPoint> =
        trend_series(args.disease, args.region, Local::now().date_naive(), &mut rng);
    match output {
        OutputArg::Json => print_json(&SeriesReport {
            disease: args.disease,
            region: args.region,
            points: &points,
        }),
        OutputArg::Table => {
            print_trend(args.disease, args.region, &points);
            Ok(())
        }
    }
}

pub fn run_forecast(args: &SeriesArgs, output: OutputArg) -> Result<()> {
    let mut rng = series_rng(args.seed);
    let points: Vec<ForecastPoint> =
        predictive_series(args.disease, args.region, Local::now().date_naive(), &mut rng);
    match output {
        OutputArg::Json => print_json(&SeriesReport {
            disease: args.disease,
            region: args.region,
            points: &points,
        }),
        OutputArg::Table => {
            print_forecast(args.disease, args.region, &points);
            Ok(())
        }
    }
}

pub fn run_compare(output: OutputArg) -> Result<()> {
    let rows: &[ComparisonRow] = disease_comparison();
    match output {
        OutputArg::Json => print_json(&rows),
        OutputArg::Table => {
            print_comparison(rows);
            Ok(())
        }
    }
}

pub fn run_insights(args: &InsightArgs, output: OutputArg) -> Result<()> {
    let insight: Insight = insights(args.disease, args.region);
    match output {
        OutputArg::Json => print_json(&insight),
        OutputArg::Table => {
            print_insight(args.disease, args.region, &insight);
            Ok(())
        }
    }
}

pub fn run_diseases(output: OutputArg) -> Result<()> {
    match output {
        OutputArg::Json => {
            let listing: Vec<DiseaseListing> = Disease::ALL
                .iter()
                .map(|disease| DiseaseListing::from_disease(*disease))
                .collect();
            print_json(&listing)
        }
        OutputArg::Table => {
            print_diseases();
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DiseaseListing {
    disease: Disease,
    name: &'static str,
    baseline_cases: f64,
    status_weights: [f64; 3],
    severity_weights: [f64; 3],
    symptoms: Vec<&'static str>,
}

impl DiseaseListing {
    fn from_disease(disease: Disease) -> Self {
        let profile = disease.profile();
        Self {
            disease,
            name: disease.display_name(),
            baseline_cases: profile.baseline_cases,
            status_weights: profile.status_weights,
            severity_weights: profile.severity_weights,
            symptoms: profile.symptom_pool(),
        }
    }
}

fn series_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{json}");
    Ok(())
}

/// Runs `work` behind a stderr spinner. The spinner is hidden when stderr
/// is not a terminal.
fn with_spinner<T>(message: String, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = work();
    spinner.finish_and_clear();
    result
}
