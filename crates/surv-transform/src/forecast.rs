//! Procedural trend and forecast series.
//!
//! These series are presentation stand-ins: they depend only on the
//! selected disease, the selected region, today's date and the random
//! source, never on the loaded records.

use chrono::{Datelike, Days, Months, NaiveDate};
use rand::Rng;
use serde::Serialize;
use surv_model::{Disease, MacroRegion};

/// Months covered by [`trend_series`], including the current one.
pub const TREND_MONTHS: u32 = 12;
/// First and last week offsets of [`predictive_series`].
pub const FORECAST_WEEKS: std::ops::RangeInclusive<i32> = -4..=7;

const JITTER_LOW: f64 = 0.8;
const JITTER_HIGH: f64 = 1.2;

const MONTH_LABELS: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Seasonal multiplier for a calendar month (1 = January).
///
/// The southern-hemisphere summer (December to March) is high season and
/// June to September is low season.
pub fn seasonal_factor(month: u32) -> f64 {
    match month {
        12 | 1..=3 => 1.5,
        6..=9 => 0.6,
        _ => 1.0,
    }
}

/// Baseline monthly volume for a disease in a region.
pub fn base_value(disease: Disease, region: MacroRegion) -> f64 {
    disease.profile().baseline_cases * region.case_multiplier()
}

fn month_label(date: NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

fn jitter<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(JITTER_LOW..JITTER_HIGH)
}

fn round_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Short pt-BR month label (`"mar."`).
    pub month: &'static str,
    pub actual: u32,
    pub predicted: u32,
}

/// One point per month from eleven months ago up to `today`.
pub fn trend_series<R: Rng>(
    disease: Disease,
    region: MacroRegion,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<TrendPoint> {
    let base = base_value(disease, region);
    (0..TREND_MONTHS)
        .rev()
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|date| {
            let expected = base * seasonal_factor(date.month());
            TrendPoint {
                date,
                month: month_label(date),
                actual: round_count(expected * jitter(rng)),
                predicted: round_count(expected),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// `"Semana -4"` through `"Semana +7"`.
    pub week: String,
    pub value: u32,
    pub lower_bound: Option<u32>,
    pub upper_bound: Option<u32>,
    pub is_future: bool,
}

fn week_date(today: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let days = Days::new(u64::from(offset.unsigned_abs()) * 7);
    if offset < 0 {
        today.checked_sub_days(days)
    } else {
        today.checked_add_days(days)
    }
}

fn week_label(offset: i32) -> String {
    if offset >= 0 {
        format!("Semana +{offset}")
    } else {
        format!("Semana {offset}")
    }
}

/// Four past weeks and eight future weeks around `today`.
///
/// Future points carry an interval whose half-width starts at 10% and
/// widens by 5 percentage points per week.
pub fn predictive_series<R: Rng>(
    disease: Disease,
    region: MacroRegion,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ForecastPoint> {
    let base = base_value(disease, region);
    FORECAST_WEEKS
        .filter_map(|offset| week_date(today, offset).map(|date| (offset, date)))
        .map(|(offset, date)| {
            let value = round_count(base * seasonal_factor(date.month()) * jitter(rng));
            let is_future = offset >= 0;
            let (lower_bound, upper_bound) = if is_future {
                let uncertainty = 0.1 + 0.05 * f64::from(offset);
                let value = f64::from(value);
                (
                    Some(round_count(value * (1.0 - uncertainty))),
                    Some(round_count(value * (1.0 + uncertainty))),
                )
            } else {
                (None, None)
            };
            ForecastPoint {
                date,
                week: week_label(offset),
                value,
                lower_bound,
                upper_bound,
                is_future,
            }
        })
        .collect()
}

/// One metric of the cross-disease comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub dengue: u32,
    pub zika: u32,
    pub chikungunya: u32,
    pub malaria: u32,
    pub febre_amarela: u32,
}

impl ComparisonRow {
    pub fn value(&self, disease: Disease) -> u32 {
        match disease {
            Disease::Dengue => self.dengue,
            Disease::Zika => self.zika,
            Disease::Chikungunya => self.chikungunya,
            Disease::Malaria => self.malaria,
            Disease::FebreAmarela => self.febre_amarela,
        }
    }
}

const COMPARISON: [ComparisonRow; 4] = [
    ComparisonRow {
        metric: "Casos Totais",
        dengue: 15_000,
        zika: 5_000,
        chikungunya: 8_000,
        malaria: 3_000,
        febre_amarela: 1_000,
    },
    ComparisonRow {
        metric: "Casos Graves",
        dengue: 3_000,
        zika: 800,
        chikungunya: 1_500,
        malaria: 900,
        febre_amarela: 400,
    },
    ComparisonRow {
        metric: "Hospitalizações",
        dengue: 2_000,
        zika: 500,
        chikungunya: 1_200,
        malaria: 700,
        febre_amarela: 300,
    },
    ComparisonRow {
        metric: "Óbitos",
        dengue: 150,
        zika: 30,
        chikungunya: 80,
        malaria: 60,
        febre_amarela: 40,
    },
];

/// Fixed national comparison figures.
pub fn disease_comparison() -> &'static [ComparisonRow] {
    &COMPARISON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Baixo",
            RiskLevel::Medium => "Médio",
            RiskLevel::High => "Alto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Risco baixo: Situação sob controle, com número de casos dentro do esperado."
            }
            RiskLevel::Medium => {
                "Risco médio: Aumento no número de casos, requer atenção e monitoramento."
            }
            RiskLevel::High => {
                "Risco alto: Situação crítica, com número elevado de casos e tendência de aumento."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Stable,
    Down,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "Tendência de aumento",
            TrendDirection::Stable => "Tendência estável",
            TrendDirection::Down => "Tendência de queda",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub risk: RiskLevel,
    pub trend: TrendDirection,
    pub notes: &'static [&'static str; 4],
}

const DENGUE_NORDESTE: Insight = Insight {
    risk: RiskLevel::High,
    trend: TrendDirection::Up,
    notes: &[
        "Aumento de 27% nos casos nas últimas 4 semanas",
        "Maior concentração em áreas urbanas com problemas de saneamento",
        "Correlação com períodos de chuva seguidos por calor intenso",
        "Eficácia reduzida das campanhas de prevenção atuais",
    ],
};

const DENGUE_SUDESTE: Insight = Insight {
    risk: RiskLevel::Medium,
    trend: TrendDirection::Stable,
    notes: &[
        "Estabilização dos casos após pico no início do ano",
        "Maior efetividade das campanhas de prevenção",
        "Concentração em áreas periféricas das grandes cidades",
        "Redução de 12% nos casos graves em comparação ao mesmo período do ano anterior",
    ],
};

const ZIKA_NORDESTE: Insight = Insight {
    risk: RiskLevel::Medium,
    trend: TrendDirection::Down,
    notes: &[
        "Redução de 15% nos casos em comparação ao ano anterior",
        "Maior conscientização sobre prevenção entre gestantes",
        "Diminuição de casos de microcefalia relacionados ao Zika",
        "Melhoria nas estratégias de controle do vetor",
    ],
};

const DEFAULT_INSIGHT: Insight = Insight {
    risk: RiskLevel::Low,
    trend: TrendDirection::Stable,
    notes: &[
        "Padrão sazonal consistente com anos anteriores",
        "Distribuição geográfica alinhada com fatores climáticos",
        "Eficácia das campanhas de prevenção dentro do esperado",
        "Correlação com indicadores socioeconômicos e de infraestrutura urbana",
    ],
};

/// Risk, trend and notes for a disease and region.
pub fn insights(disease: Disease, region: MacroRegion) -> Insight {
    match (disease, region) {
        (Disease::Dengue, MacroRegion::Nordeste) => DENGUE_NORDESTE,
        (Disease::Dengue, MacroRegion::Sudeste) => DENGUE_SUDESTE,
        (Disease::Zika, MacroRegion::Nordeste) => ZIKA_NORDESTE,
        _ => DEFAULT_INSIGHT,
    }
}
