//! Query & aggregation over a loaded table: fleet filter, date range,
//! date-descending order and totals.

use crate::models::{ALL_FLEETS, FleetFilter, Record, Summary};
use crate::utils::round2;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Records whose fleet matches, in source order.
pub fn filter_by_fleet(records: &[Record], filter: &FleetFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|r| filter.matches(&r.fleet))
        .cloned()
        .collect()
}

/// Records whose calendar date falls in `[start, end]`, in source order.
pub fn filter_by_range(records: &[Record], start: NaiveDate, end: NaiveDate) -> Vec<Record> {
    records
        .iter()
        .filter(|r| {
            let d = r.date.date();
            d >= start && d <= end
        })
        .cloned()
        .collect()
}

/// Most recent first; equal dates keep insertion order (stable sort).
pub fn sort_by_date_desc(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

pub fn aggregate(records: &[Record]) -> Summary {
    let total: f64 = records.iter().map(|r| r.worked_hours).sum();
    Summary {
        count: records.len(),
        total_hours: round2(total),
    }
}

/// Choices for the fleet filter: the `All` sentinel followed by the
/// distinct fleets present in the table. Numeric codes come first in
/// numeric order, other codes follow alphabetically.
pub fn fleet_options(records: &[Record]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records.iter().map(|r| r.fleet.as_str()).collect();
    let mut fleets: Vec<&str> = distinct.into_iter().collect();
    fleets.sort_by(|a, b| fleet_order(a, b));

    std::iter::once(ALL_FLEETS.to_string())
        .chain(fleets.into_iter().map(str::to_string))
        .collect()
}

fn fleet_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Selection applied by `list` and `export`.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub fleet: FleetFilter,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

/// Filtered rows in display order plus their totals.
#[derive(Debug, Clone)]
pub struct View {
    pub records: Vec<Record>,
    pub summary: Summary,
}

pub fn build_view(records: &[Record], query: &ViewQuery) -> View {
    let mut selected = filter_by_fleet(records, &query.fleet);
    if let Some((start, end)) = query.range {
        selected = filter_by_range(&selected, start, end);
    }

    let selected = sort_by_date_desc(selected);
    let summary = aggregate(&selected);

    View {
        records: selected,
        summary,
    }
}
