use crate::utils::date::{format_datetime, serde_datetime};
use crate::utils::formatting::{format_hours, format_reading};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column names of the backing file and of every export, in order.
pub const COLUMNS: [&str; 6] = [
    "Data",
    "Operador",
    "Frota",
    "Horimetro Inicial",
    "Horimetro Final",
    "Horas Trabalhadas",
];

/// One submitted horimeter reading.
///
/// Only built through validation (see `core::validate`) or loaded from the
/// store; `worked_hours` is always `round2(final_reading - initial_reading)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Data", with = "serde_datetime")]
    pub date: NaiveDateTime,
    #[serde(rename = "Operador")]
    pub operator: String,
    #[serde(rename = "Frota")]
    pub fleet: String,
    #[serde(rename = "Horimetro Inicial")]
    pub initial_reading: f64,
    #[serde(rename = "Horimetro Final")]
    pub final_reading: f64,
    #[serde(rename = "Horas Trabalhadas")]
    pub worked_hours: f64,
}

impl Record {
    pub fn date_str(&self) -> String {
        format_datetime(&self.date)
    }

    /// Display row, same order as [`COLUMNS`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date_str(),
            self.operator.clone(),
            self.fleet.clone(),
            format_reading(self.initial_reading),
            format_reading(self.final_reading),
            format_hours(self.worked_hours),
        ]
    }
}
