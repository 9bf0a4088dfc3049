use crate::errors::AppResult;
use crate::store::RecordStore;
use std::path::Path;

/// Create the store file header-only if it does not exist yet.
/// Returns `true` when a new file was created.
pub fn init_store(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    RecordStore::new(path).persist(&[])?;
    Ok(true)
}
