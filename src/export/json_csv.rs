// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::Record;

/// CSV export with the same header and layout as the record store.
pub fn to_csv_bytes(records: &[Record]) -> AppResult<Vec<u8>> {
    crate::store::records::serialize(records)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))
}

/// JSON export pretty-printed, keyed by column name.
pub fn to_json_bytes(records: &[Record]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}
