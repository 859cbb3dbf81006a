use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use surv_mock::generate_cases;
use surv_model::{CaseStatus, Disease, DiseaseCase, Severity, SurveillanceCase};
use surv_transform::aggregate::{
    TIMELINE_DAYS, case_age_distribution, case_summary, case_symptom_frequency,
    cases_by_date_dense, cases_by_date_sparse, rank_municipalities, rank_regions,
    severity_distribution, surveillance_age_distribution, surveillance_summary,
    surveillance_symptom_frequency, top_symptoms,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn case(
    id: &str,
    age: Option<u32>,
    region: &str,
    severity: Severity,
    date: NaiveDate,
) -> DiseaseCase {
    DiseaseCase {
        id: id.to_string(),
        name: None,
        age,
        gender: None,
        region: region.to_string(),
        date,
        status: CaseStatus::Active,
        severity,
        symptoms: vec!["fever".to_string(), "rash".to_string()],
    }
}

fn notification(fields: &[(&str, &str)]) -> SurveillanceCase {
    let mut record = SurveillanceCase::default();
    for (key, value) in fields {
        let value = Some((*value).to_string());
        match *key {
            "uf" => record.uf_notificacao = value,
            "municipio" => record.municipio_notificacao = value,
            "data" => record.data_notificacao = value,
            "nascimento" => record.ano_nascimento = value,
            "febre" => record.febre = value,
            "cefaleia" => record.cefaleia = value,
            "hospitalizacao" => record.hospitalizacao = value,
            "obito" => record.data_obito = value,
            other => panic!("unknown fixture key {other}"),
        }
    }
    record
}

#[test]
fn age_histogram_shape() {
    let date = ymd(2025, 3, 1);
    let cases = vec![
        case("A", Some(4), "Sul - Paraná", Severity::Mild, date),
        case("B", Some(10), "Sul - Paraná", Severity::Mild, date),
        case("C", Some(19), "Sul - Paraná", Severity::Mild, date),
        case("D", Some(45), "Sul - Paraná", Severity::Mild, date),
        case("E", Some(70), "Sul - Paraná", Severity::Mild, date),
        case("F", Some(88), "Sul - Paraná", Severity::Mild, date),
        case("G", None, "Sul - Paraná", Severity::Mild, date),
    ];
    insta::assert_json_snapshot!(case_age_distribution(&cases), @r#"
    [
      {
        "label": "0-9",
        "count": 1
      },
      {
        "label": "10-19",
        "count": 2
      },
      {
        "label": "20-29",
        "count": 0
      },
      {
        "label": "30-39",
        "count": 0
      },
      {
        "label": "40-49",
        "count": 1
      },
      {
        "label": "50-59",
        "count": 0
      },
      {
        "label": "60-69",
        "count": 0
      },
      {
        "label": "70+",
        "count": 2
      }
    ]
    "#);
}

#[test]
fn age_buckets_never_exceed_defined_ages() {
    let mut rng = StdRng::seed_from_u64(8);
    let cases = generate_cases(Disease::Malaria, 500, ymd(2025, 3, 15), &mut rng);
    let buckets = case_age_distribution(&cases);
    assert_eq!(buckets.len(), 8);
    let total: usize = buckets.iter().map(|bucket| bucket.count).sum();
    assert_eq!(total, cases.iter().filter(|case| case.age.is_some()).count());
}

#[test]
fn surveillance_ages_come_from_birth_year() {
    let cases = vec![
        notification(&[("nascimento", "2020")]),
        notification(&[("nascimento", "1950")]),
        notification(&[("nascimento", "2031")]),
        notification(&[("nascimento", "")]),
        notification(&[]),
    ];
    let buckets = surveillance_age_distribution(&cases, 2025);
    assert_eq!(buckets[0].count, 1);
    assert_eq!(buckets[7].count, 1);
    assert_eq!(buckets.iter().map(|bucket| bucket.count).sum::<usize>(), 2);
}

#[test]
fn dense_timeline_has_thirty_ascending_days() {
    let today = ymd(2025, 3, 15);
    let mut rng = StdRng::seed_from_u64(4);
    let mut cases = generate_cases(Disease::Dengue, 300, today, &mut rng);
    cases.push(case("OLD", Some(30), "Sul - Paraná", Severity::Mild, ymd(2024, 1, 1)));

    let points = cases_by_date_dense(&cases, today);
    assert_eq!(points.len(), TIMELINE_DAYS);
    assert_eq!(points[0].date, ymd(2025, 2, 14));
    assert_eq!(points[29].date, today);
    assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert_eq!(points.iter().map(|point| point.count).sum::<usize>(), 300);

    let empty = cases_by_date_dense(&[], today);
    assert_eq!(empty.len(), TIMELINE_DAYS);
    assert!(empty.iter().all(|point| point.count == 0));
}

#[test]
fn sparse_timeline_keeps_latest_present_dates() {
    let mut cases: Vec<SurveillanceCase> = (1..=31)
        .map(|day| {
            let date = format!("2025-01-{day:02}");
            notification(&[("data", date.as_str())])
        })
        .collect();
    cases.push(notification(&[("data", "2025-02-10T12:00:00")]));
    cases.push(notification(&[("data", "2025-02-10")]));
    cases.push(notification(&[("data", "inválida")]));

    let points = cases_by_date_sparse(&cases);
    assert_eq!(points.len(), 30);
    assert_eq!(points[0].date, ymd(2025, 1, 3));
    let last = points.last().unwrap();
    assert_eq!(last.date, ymd(2025, 2, 10));
    assert_eq!(last.count, 2);
}

#[test]
fn sparse_timeline_drops_non_iso_dates() {
    let cases = vec![
        notification(&[("data", "2025-01-03 00:00:00")]),
        notification(&[("data", "03/01/2025")]),
    ];
    let points = cases_by_date_sparse(&cases);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, ymd(2025, 1, 3));
    assert_eq!(points[0].count, 1);
}

#[test]
fn symptom_frequencies_count_membership() {
    let date = ymd(2025, 3, 1);
    let mut cases = vec![
        case("A", Some(20), "Sul - Paraná", Severity::Mild, date),
        case("B", Some(20), "Sul - Paraná", Severity::Mild, date),
        case("C", Some(20), "Sul - Paraná", Severity::Mild, date),
    ];
    cases[2].symptoms = vec!["headache".to_string()];

    let rows = case_symptom_frequency(&cases);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].key, "fever");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].percentage, 66.7);
    assert_eq!(rows[1].key, "rash");
    assert_eq!(rows[2].key, "headache");
    assert_eq!(rows[2].percentage, 33.3);
    assert!(rows.windows(2).all(|pair| pair[0].count >= pair[1].count));

    let compact = top_symptoms(rows, 5);
    assert_eq!(compact.len(), 5);
}

#[test]
fn surveillance_symptoms_count_affirmative_flags() {
    let cases = vec![
        notification(&[("febre", "Sim"), ("cefaleia", "Sim")]),
        notification(&[("febre", "Sim"), ("cefaleia", "Não")]),
        notification(&[("febre", "Ignorado")]),
        notification(&[]),
    ];
    let rows = surveillance_symptom_frequency(&cases);
    assert_eq!(rows[0].label, "Febre");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].percentage, 50.0);
    assert_eq!(rows[0].color, "#ef4444");
    assert_eq!(rows[1].label, "Cefaleia");
    assert_eq!(rows[1].count, 1);
}

#[test]
fn region_ranking_caps_at_ten() {
    let date = ymd(2025, 3, 1);
    let mut cases = Vec::new();
    for idx in 0..12 {
        for copy in 0..=idx {
            let severity = if copy == 0 { Severity::Severe } else { Severity::Mild };
            cases.push(case(
                &format!("{idx}-{copy}"),
                None,
                &format!("Região {idx:02}"),
                severity,
                date,
            ));
        }
    }
    let rows = rank_regions(&cases);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].label, "Região 11");
    assert_eq!(rows[0].total, 12);
    assert_eq!(rows[0].flagged, 1);
    assert!(rows.windows(2).all(|pair| pair[0].total >= pair[1].total));
}

#[test]
fn municipality_ranking_counts_hospitalizations() {
    let cases = vec![
        notification(&[("uf", "SP"), ("municipio", "Campinas"), ("hospitalizacao", "Sim")]),
        notification(&[("uf", "SP"), ("municipio", "Campinas")]),
        notification(&[("uf", "BA"), ("municipio", "Salvador")]),
    ];
    let rows = rank_municipalities(&cases);
    assert_eq!(rows[0].label, "SP - Campinas");
    assert_eq!((rows[0].total, rows[0].flagged), (2, 1));
    assert_eq!(rows[0].flagged_share(), 50.0);
    assert_eq!(rows[1].label, "BA - Salvador");
}

#[test]
fn severity_always_has_three_buckets() {
    let rows = severity_distribution(&[]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].severity, Severity::Severe);
    assert_eq!(rows[2].color, "hsl(var(--chart-5))");
}

#[test]
fn summaries() {
    let date = ymd(2025, 3, 1);
    let mut cases = vec![
        case("A", None, "Sul - Paraná", Severity::Severe, date),
        case("B", None, "Norte - Pará", Severity::Mild, date),
        case("C", None, "Norte - Pará", Severity::Mild, date),
        case("D", None, "Norte - Pará", Severity::Moderate, date),
    ];
    cases[1].status = CaseStatus::Recovered;
    let summary = case_summary(&cases);
    assert_eq!((summary.total, summary.active, summary.severe, summary.regions), (4, 3, 1, 2));
    assert_eq!(summary.active_share, 75.0);
    assert_eq!(summary.severe_share, 25.0);

    let empty = case_summary(&[]);
    assert_eq!(empty.active_share, 0.0);

    let notifications = vec![
        notification(&[("uf", "SP"), ("municipio", "Campinas"), ("hospitalizacao", "Sim")]),
        notification(&[("uf", "SP"), ("municipio", "Santos"), ("obito", "2025-01-03")]),
        notification(&[("uf", "RJ"), ("obito", " ")]),
    ];
    let summary = surveillance_summary(&notifications);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.hospitalized, 1);
    assert_eq!(summary.deaths, 1);
    assert_eq!(summary.ufs, 2);
    assert_eq!(summary.municipalities, 2);
}
