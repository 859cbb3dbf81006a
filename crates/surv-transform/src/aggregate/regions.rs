use std::collections::BTreeMap;

use surv_model::{DiseaseCase, Severity, SurveillanceCase};

use super::RegionRanking;

/// Rows kept by the capped rankings.
pub const RANKING_LIMIT: usize = 10;

/// Placeholder for a missing location part.
const MISSING: &str = "-";

fn rank(
    entries: impl Iterator<Item = (String, bool)>,
    limit: Option<usize>,
) -> Vec<RegionRanking> {
    let mut groups: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for (label, flagged) in entries {
        let slot = groups.entry(label).or_default();
        slot.0 += 1;
        if flagged {
            slot.1 += 1;
        }
    }
    let mut rows: Vec<RegionRanking> = groups
        .into_iter()
        .map(|(label, (total, flagged))| RegionRanking {
            label,
            total,
            flagged,
        })
        .collect();
    // Stable over the alphabetical map order, so ties stay alphabetical.
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

fn part(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => MISSING,
    }
}

/// Top regions by case count with the severe sub-count.
pub fn rank_regions(cases: &[DiseaseCase]) -> Vec<RegionRanking> {
    rank(
        cases
            .iter()
            .map(|case| (case.region.clone(), case.severity == Severity::Severe)),
        Some(RANKING_LIMIT),
    )
}

/// Top municipalities keyed `"UF - Municipio"` with the hospitalized
/// sub-count.
pub fn rank_municipalities(cases: &[SurveillanceCase]) -> Vec<RegionRanking> {
    rank(
        cases.iter().map(|case| {
            let label = format!(
                "{} - {}",
                part(case.uf_notificacao.as_deref()),
                part(case.municipio_notificacao.as_deref())
            );
            (label, case.is_hospitalized())
        }),
        Some(RANKING_LIMIT),
    )
}

/// Every notifying UF with the hospitalized sub-count, uncapped.
///
/// Cases without a UF are left out rather than grouped under a placeholder.
pub fn rank_ufs(cases: &[SurveillanceCase]) -> Vec<RegionRanking> {
    rank(
        cases.iter().filter_map(|case| {
            let uf = case.uf_notificacao.as_deref().map(str::trim)?;
            (!uf.is_empty()).then(|| (uf.to_string(), case.is_hospitalized()))
        }),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(
        uf: Option<&str>,
        municipio: Option<&str>,
        hospitalized: bool,
    ) -> SurveillanceCase {
        SurveillanceCase {
            uf_notificacao: uf.map(str::to_string),
            municipio_notificacao: municipio.map(str::to_string),
            hospitalizacao: Some(if hospitalized { "Sim" } else { "Não" }.to_string()),
            ..SurveillanceCase::default()
        }
    }

    #[test]
    fn municipality_keys_combine_uf_and_name() {
        let cases = vec![
            notification(Some("SP"), Some("Campinas"), true),
            notification(Some("SP"), Some("Campinas"), false),
            notification(Some("RJ"), None, false),
        ];
        let rows = rank_municipalities(&cases);
        assert_eq!(rows[0].label, "SP - Campinas");
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].flagged, 1);
        assert_eq!(rows[1].label, "RJ - -");
    }

    #[test]
    fn ties_break_alphabetically() {
        let cases = vec![
            notification(Some("SP"), None, false),
            notification(Some("BA"), None, false),
            notification(Some("MG"), None, false),
        ];
        let labels: Vec<String> = rank_ufs(&cases).into_iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["BA", "MG", "SP"]);
    }

    #[test]
    fn ufs_skip_cases_without_a_uf() {
        let cases = vec![
            notification(Some("SP"), Some("Campinas"), true),
            notification(None, Some("Salvador"), false),
            notification(Some("  "), None, false),
        ];
        let rows = rank_ufs(&cases);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "SP");
        assert_eq!(rows[0].total, 1);
        assert_eq!(rows[0].flagged, 1);
        assert!(rank_ufs(&[SurveillanceCase::default()]).is_empty());
    }
}
