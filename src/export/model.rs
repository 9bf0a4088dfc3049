// src/export/model.rs

use crate::models::COLUMNS;

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMNS.to_vec()
}
