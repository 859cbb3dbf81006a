use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use surv_model::{DiseaseCase, SurveillanceCase};

use super::DatePoint;
use crate::dates::parse_optional_date;

/// Length of both timeline windows.
pub const TIMELINE_DAYS: usize = 30;

/// Notification counts for the dates present in the data.
///
/// Dates are keyed by their calendar-day part; records whose notification
/// date does not parse as ISO (`03/01/2025`, say) are not counted. Only the
/// latest [`TIMELINE_DAYS`] present dates are kept, ascending.
pub fn cases_by_date_sparse(cases: &[SurveillanceCase]) -> Vec<DatePoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in cases
        .iter()
        .filter_map(|case| parse_optional_date(case.data_notificacao.as_deref()))
    {
        *counts.entry(date).or_default() += 1;
    }
    let skip = counts.len().saturating_sub(TIMELINE_DAYS);
    counts
        .into_iter()
        .skip(skip)
        .map(|(date, count)| DatePoint { date, count })
        .collect()
}

/// Exactly [`TIMELINE_DAYS`] entries from `today - 29` to `today`,
/// zero-filled. Cases dated outside the window are ignored.
pub fn cases_by_date_dense(cases: &[DiseaseCase], today: NaiveDate) -> Vec<DatePoint> {
    let mut points: Vec<DatePoint> = (0..TIMELINE_DAYS as u64)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| DatePoint { date, count: 0 })
        .collect();
    let Some(first) = points.first().map(|point| point.date) else {
        return points;
    };
    for case in cases {
        if case.date < first || case.date > today {
            continue;
        }
        let offset = (case.date - first).num_days() as usize;
        if let Some(point) = points.get_mut(offset) {
            point.count += 1;
        }
    }
    points
}
