// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod range;
mod xlsx;

pub(crate) use fs_utils::ensure_writable;
pub use json_csv::{to_csv_bytes, to_json_bytes};
pub use logic::ExportLogic;
pub use xlsx::export_spreadsheet;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Worksheet name used in spreadsheet exports.
pub const SHEET_NAME: &str = "Horimetro";

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Suggested file name when none is given.
pub const DEFAULT_EXPORT_FILE: &str = "registros_horimetro.xlsx";

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} records)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_MIME,
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}
