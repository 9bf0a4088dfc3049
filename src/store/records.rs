//! Flat-file record store: one CSV file, header row plus one row per reading.

use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, Record};
use crate::utils::round2;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in file order.
    ///
    /// A missing file is created header-only and yields an empty table.
    /// A file with missing columns, unparseable rows or rows breaking the
    /// record invariants is a `StoreRead` error; rows are never skipped.
    pub fn load(&self) -> AppResult<Vec<Record>> {
        if !self.path.exists() {
            let empty = Vec::new();
            self.persist(&empty)?;
            return Ok(empty);
        }

        let content = fs::read(&self.path).map_err(|e| self.read_error(e))?;
        self.parse(&content)
    }

    /// Replace the backing file with `records`.
    ///
    /// The full content is serialized in memory and written to a sibling
    /// temporary file which is then renamed over the store, so a failed
    /// write leaves the previous file intact.
    pub fn persist(&self, records: &[Record]) -> AppResult<()> {
        let bytes = serialize(records).map_err(|e| self.write_error(e))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let tmp = self.tmp_path();
        let written = File::create(&tmp).and_then(|mut f| {
            f.write_all(&bytes)?;
            f.sync_all()
        });

        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }

        Ok(())
    }

    fn parse(&self, content: &[u8]) -> AppResult<Vec<Record>> {
        // spreadsheet editors like to add a UTF-8 BOM
        let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);

        // A zero-length file is treated like a header-only one.
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(content);

        let headers = rdr.headers().map_err(|e| self.read_error(e))?.clone();
        for col in COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(self.read_error(format!("missing column '{col}'")));
            }
        }

        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<Record>().enumerate() {
            let record = row.map_err(|e| self.read_error(e))?;
            // data starts on line 2
            check_row(&record).map_err(|e| self.read_error(format!("line {}: {e}", i + 2)))?;
            records.push(record);
        }

        Ok(records)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "store.csv".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn read_error<E: std::fmt::Display>(&self, e: E) -> AppError {
        AppError::StoreRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }

    fn write_error<E: std::fmt::Display>(&self, e: E) -> AppError {
        AppError::StoreWrite {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

/// Largest accepted gap between stored worked hours and the readings.
/// Rows written with a different tie-breaking rule are off by one cent.
const HOURS_TOLERANCE: f64 = 0.011;

/// A stored row must still satisfy the record invariants: readings
/// non-negative, final >= initial, worked hours matching the readings.
fn check_row(r: &Record) -> Result<(), String> {
    for (name, value) in [("initial", r.initial_reading), ("final", r.final_reading)] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("invalid {name} reading {value}"));
        }
    }
    if r.final_reading < r.initial_reading {
        return Err(format!(
            "final reading {} is less than initial reading {}",
            r.final_reading, r.initial_reading
        ));
    }
    let expected = round2(r.final_reading - r.initial_reading);
    let tolerance = HOURS_TOLERANCE.max(expected.abs() * f64::EPSILON * 4.0);
    if !r.worked_hours.is_finite() || (r.worked_hours - expected).abs() > tolerance {
        return Err(format!(
            "worked hours {} do not match readings (expected {expected})",
            r.worked_hours
        ));
    }
    Ok(())
}

/// Functional append: returns a new table, the input is left untouched.
pub fn append(records: &[Record], record: Record) -> Vec<Record> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    next
}

/// Serialize header + rows to CSV bytes. `worked_hours` is rounded here,
/// readings keep full precision.
pub(crate) fn serialize(records: &[Record]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS)?;

    for r in records {
        let mut row = r.clone();
        row.worked_hours = round2(row.worked_hours);
        wtr.serialize(&row)?;
    }

    wtr.into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))
}
