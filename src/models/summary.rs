use serde::Serialize;

/// Totals over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_hours: f64,
}
