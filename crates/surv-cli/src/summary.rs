use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use surv_cli::pipeline::{CaseCharts, SurveillanceCharts};
use surv_model::{CaseStatus, CsvSource, Disease, MacroRegion, Severity};
use surv_transform::aggregate::{SeverityCount, SymptomFrequency};
use surv_transform::{
    CategoryCount, ComparisonRow, DatePoint, ForecastPoint, Insight, RegionRanking, RiskLevel,
    TrendPoint,
};

/// Widest bar drawn in chart columns.
const BAR_WIDTH: usize = 30;

pub fn print_case_dashboard(disease: Disease, charts: &CaseCharts) {
    println!("Doença: {}", disease.display_name());
    let summary = &charts.summary;
    let mut cards = summary_table();
    cards.set_header(vec![
        header_cell("Total de casos"),
        header_cell("Casos ativos"),
        header_cell("Casos graves"),
        header_cell("Regiões afetadas"),
    ]);
    cards.add_row(vec![
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        share_cell(summary.active, summary.active_share, Color::Blue),
        share_cell(summary.severe, summary.severe_share, Color::Red),
        Cell::new(summary.regions),
    ]);
    println!("{cards}");
    if summary.total == 0 {
        println!("Nenhum caso corresponde aos filtros.");
        return;
    }

    print_timeline("Casos nos últimos 30 dias", &charts.timeline);
    print_severity(&charts.severity);
    print_categories("Faixa etária", &charts.ages);
    print_symptoms("Sintomas mais frequentes", &charts.top_symptoms);
    print_rankings("Regiões", "Graves", &charts.regions);
}

pub fn print_surveillance_dashboard(source: &CsvSource, charts: &SurveillanceCharts) {
    println!("Fonte: {source}");
    let summary = &charts.summary;
    let mut cards = summary_table();
    cards.set_header(vec![
        header_cell("Notificações"),
        header_cell("Hospitalizações"),
        header_cell("Óbitos"),
        header_cell("UFs"),
        header_cell("Municípios"),
    ]);
    cards.add_row(vec![
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        count_cell(summary.hospitalized, Color::Yellow),
        count_cell(summary.deaths, Color::Red),
        Cell::new(summary.ufs),
        Cell::new(summary.municipalities),
    ]);
    println!("{cards}");
    if summary.total == 0 {
        println!("Nenhuma notificação disponível.");
        return;
    }

    print_timeline("Notificações por data", &charts.timeline);
    print_categories("Faixa etária", &charts.ages);
    print_symptoms("Sintomas", &charts.symptoms);
    print_symptoms("Comorbidades", &charts.comorbidities);
    print_rankings("Municípios", "Hospitalizados", &charts.municipalities);
    print_rankings("UFs", "Hospitalizados", &charts.ufs);
}

pub fn print_trend(disease: Disease, region: MacroRegion, points: &[TrendPoint]) {
    println!(
        "Tendência mensal: {} / {}",
        disease.display_name(),
        region.display_name()
    );
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Mês"),
        header_cell("Data"),
        header_cell("Casos reais"),
        header_cell("Casos previstos"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for point in points {
        let color = if point.actual > point.predicted {
            Color::Red
        } else {
            Color::Green
        };
        table.add_row(vec![
            Cell::new(point.month),
            dim_cell(point.date),
            Cell::new(point.actual).fg(color),
            Cell::new(point.predicted),
        ]);
    }
    println!("{table}");
}

pub fn print_forecast(disease: Disease, region: MacroRegion, points: &[ForecastPoint]) {
    println!(
        "Modelo preditivo: {} / {}",
        disease.display_name(),
        region.display_name()
    );
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Semana"),
        header_cell("Data"),
        header_cell("Casos"),
        header_cell("Limite inferior"),
        header_cell("Limite superior"),
    ]);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for point in points {
        let week = if point.is_future {
            Cell::new(&point.week).fg(Color::Cyan)
        } else {
            Cell::new(&point.week)
        };
        table.add_row(vec![
            week,
            dim_cell(point.date),
            Cell::new(point.value).add_attribute(Attribute::Bold),
            optional_cell(point.lower_bound),
            optional_cell(point.upper_bound),
        ]);
    }
    println!("{table}");
}

pub fn print_comparison(rows: &[ComparisonRow]) {
    let mut table = chart_table();
    let mut header = vec![header_cell("Indicador")];
    header.extend(Disease::ALL.iter().map(|disease| header_cell(disease.display_name())));
    table.set_header(header);
    for index in 1..=Disease::ALL.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = vec![Cell::new(row.metric).add_attribute(Attribute::Bold)];
        cells.extend(Disease::ALL.iter().map(|disease| Cell::new(row.value(*disease))));
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_insight(disease: Disease, region: MacroRegion, insight: &Insight) {
    println!("{} / {}", disease.display_name(), region.display_name());
    let mut table = chart_table();
    table.set_header(vec![header_cell("Nível de risco"), header_cell("Tendência")]);
    table.add_row(vec![
        Cell::new(insight.risk.label())
            .fg(risk_color(insight.risk))
            .add_attribute(Attribute::Bold),
        Cell::new(insight.trend.label()),
    ]);
    println!("{table}");
    println!("{}", insight.risk.description());
    for note in insight.notes {
        println!("- {note}");
    }
}

pub fn print_diseases() {
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Código"),
        header_cell("Doença"),
        header_cell("Casos base"),
        header_cell("Ativos / Recuperados / Óbitos"),
        header_cell("Leves / Moderados / Graves"),
        header_cell("Sintomas"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for disease in Disease::ALL {
        let profile = disease.profile();
        table.add_row(vec![
            Cell::new(disease.as_str()).fg(Color::Blue),
            Cell::new(disease.display_name()),
            Cell::new(profile.baseline_cases),
            Cell::new(weights(&profile.status_weights)),
            Cell::new(weights(&profile.severity_weights)),
            Cell::new(profile.symptom_pool().join(", ")),
        ]);
    }
    println!("{table}");
    let statuses: Vec<&str> = CaseStatus::ALL.iter().map(CaseStatus::label).collect();
    println!("Situações: {}", statuses.join(", "));
}

fn weights(values: &[f64; 3]) -> String {
    values
        .iter()
        .map(|value| format!("{:.0}%", value * 100.0))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn print_timeline(title: &str, points: &[DatePoint]) {
    let max = points.iter().map(|point| point.count).max().unwrap_or(0);
    let mut table = chart_table();
    table.set_header(vec![header_cell("Data"), header_cell("Casos"), header_cell("")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(point.date),
            count_cell(point.count, Color::Cyan),
            bar_cell(point.count, max, Color::Cyan),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_severity(rows: &[SeverityCount]) {
    let total: usize = rows.iter().map(|row| row.count).sum();
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Gravidade"),
        header_cell("Casos"),
        header_cell("%"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        let share = surv_transform::aggregate::share(row.count, total);
        table.add_row(vec![
            Cell::new(row.severity.as_str()).fg(severity_color(row.severity)),
            Cell::new(row.count),
            Cell::new(format!("{share:.0}%")),
        ]);
    }
    println!();
    println!("Gravidade:");
    println!("{table}");
}

fn print_categories(title: &str, rows: &[CategoryCount]) {
    let max = rows.iter().map(|row| row.count).max().unwrap_or(0);
    let mut table = chart_table();
    table.set_header(vec![header_cell("Faixa"), header_cell("Casos"), header_cell("")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            count_cell(row.count, Color::Blue),
            bar_cell(row.count, max, Color::Blue),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_symptoms(title: &str, rows: &[SymptomFrequency]) {
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Sintoma"),
        header_cell("Casos"),
        header_cell("%"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            count_cell(row.count, Color::Magenta),
            Cell::new(format!("{:.1}%", row.percentage)),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_rankings(title: &str, flagged_label: &str, rows: &[RegionRanking]) {
    let mut table = chart_table();
    table.set_header(vec![
        header_cell("Local"),
        header_cell("Total"),
        header_cell(flagged_label),
        header_cell("%"),
    ]);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(row.total).add_attribute(Attribute::Bold),
            count_cell(row.flagged, Color::Red),
            dim_cell(format!("{:.0}%", row.flagged_share())),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn summary_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn chart_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

fn bar_cell(count: usize, max: usize, color: Color) -> Cell {
    Cell::new(bar(count, max)).fg(color)
}

fn share_cell(count: usize, share: f64, color: Color) -> Cell {
    if count == 0 {
        return dim_cell(0);
    }
    Cell::new(format!("{count} ({share:.1}% dos casos)")).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<u32>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Mild => Color::Green,
        Severity::Moderate => Color::Yellow,
        Severity::Severe => Color::Red,
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
