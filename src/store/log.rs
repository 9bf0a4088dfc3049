//! Internal audit log: append-only CSV next to the record store.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the audit log, creating it (with header) if needed.
pub fn audit(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    wtr.serialize(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })
    .map_err(|e| AppError::Other(format!("audit log write failed: {e}")))?;

    wtr.flush()?;
    Ok(())
}

/// Non-blocking variant: a failed audit write only produces a warning.
pub fn audit_or_warn(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(path, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| AppError::Other(format!("audit log read failed: {e}")))?;

    let mut entries = Vec::new();
    for row in rdr.deserialize::<LogEntry>() {
        entries.push(row.map_err(|e| AppError::Other(format!("audit log read failed: {e}")))?);
    }

    Ok(entries)
}
