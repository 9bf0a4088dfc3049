use chrono::NaiveDateTime;

/// Field values as collected from the operator, before validation.
///
/// Readings stay as text so that a non-numeric entry is reported as an
/// invalid number rather than rejected by the argument parser.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub date: Option<NaiveDateTime>,
    pub operator: Option<String>,
    pub fleet: Option<String>,
    pub initial_reading: Option<String>,
    pub final_reading: Option<String>,
}

impl RawRecord {
    pub fn new(operator: &str, fleet: &str, initial: &str, final_reading: &str) -> Self {
        Self {
            date: None,
            operator: Some(operator.to_string()),
            fleet: Some(fleet.to_string()),
            initial_reading: Some(initial.to_string()),
            final_reading: Some(final_reading.to_string()),
        }
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }
}
