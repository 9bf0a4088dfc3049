use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::store::log::audit_or_warn;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::resolve;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the record store to `dest_file`, optionally as a `.zip`.
    /// Returns the path of the final backup file.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = cfg.store_path();
        let dest = resolve(dest_file);

        // 1️⃣ Check store exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Record store not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        ensure_writable(&final_target, force)?;

        // 3️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(&src, &final_target)?
        } else {
            fs::copy(&src, &dest)?;
            dest
        };
        success(format!("Backup created: {}", final_path.display()));

        // 4️⃣ Audit
        audit_or_warn(
            &cfg.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `src` into a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid store path: {}", src.display())))?;

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    if let Err(e) = zip.finish() {
        warning(format!("Failed to finalize archive: {e}"));
        let _ = fs::remove_file(zip_path);
        return Err(io::Error::other(e).into());
    }

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
