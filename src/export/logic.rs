// src/export/logic.rs

use crate::config::Config;
use crate::core::query::{ViewQuery, build_view};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_output};
use crate::export::json_csv::{to_csv_bytes, to_json_bytes};
use crate::export::xlsx::export_spreadsheet;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::RecordStore;
use crate::store::log::audit_or_warn;
use crate::ui::messages::{info, warning};
use crate::utils::path::resolve;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records selected by `query`, in display order.
    ///
    /// - `file`: output path; defaults to the configured export file name
    ///   with the extension of `format`, in the current directory
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the written path, or `None` when nothing matched.
    pub fn export(
        session: &Session,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        query: &ViewQuery,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let user = session.require()?;

        let records = RecordStore::new(cfg.store_path()).load()?;
        let view = build_view(&records, query);

        if view.records.is_empty() {
            warning("No records found for the selected fleet/range.");
            return Ok(None);
        }

        // only ask about overwriting once there is something to write
        let path = output_path(cfg, format, file);
        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {} ({}): {}",
            format.label(),
            format.mime_type(),
            path.display()
        ));

        let bytes = match format {
            ExportFormat::Xlsx => export_spreadsheet(&view.records)?,
            ExportFormat::Csv => to_csv_bytes(&view.records)?,
            ExportFormat::Json => to_json_bytes(&view.records)?,
        };

        write_output(&path, &bytes)?;

        audit_or_warn(
            &cfg.log_path(),
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} records exported as {} by {user} (fleet: {})",
                view.summary.count,
                format.as_str(),
                query.fleet
            ),
        );

        notify_export_success(format.label(), &path, view.summary.count);
        Ok(Some(path))
    }
}

fn output_path(cfg: &Config, format: ExportFormat, file: Option<&str>) -> PathBuf {
    match file {
        Some(f) => resolve(f),
        None => resolve(&suggested_file_name(cfg, format)),
    }
}

/// Suggested download name for an export format.
pub fn suggested_file_name(cfg: &Config, format: ExportFormat) -> String {
    Path::new(&cfg.export_file)
        .with_extension(format.as_str())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("registros_horimetro.{}", format.as_str()))
}
