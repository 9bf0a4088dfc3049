use crate::config::Config;
use crate::core::session::Session;
use crate::core::validate::validate_with;
use crate::errors::AppResult;
use crate::models::{RawRecord, Record};
use crate::store::log::audit_or_warn;
use crate::store::{RecordStore, append};
use crate::ui::messages::{success, warning};
use crate::utils::{date, format_hours};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `raw`, append it to the store and persist.
    ///
    /// Nothing is written when validation fails. When the final write
    /// fails the store file keeps its previous content and the rejected
    /// record is echoed so it can be resubmitted.
    pub fn apply(session: &Session, cfg: &Config, raw: &RawRecord) -> AppResult<Record> {
        let user = session.require()?;

        let record = validate_with(raw, &cfg.fleet_policy(), date::now())?;

        let store = RecordStore::new(cfg.store_path());
        let records = store.load()?;
        let next = append(&records, record.clone());

        if let Err(e) = store.persist(&next) {
            warning(format!(
                "Record NOT saved: {} | {} | fleet {} | {} -> {}",
                record.date_str(),
                record.operator,
                record.fleet,
                record.initial_reading,
                record.final_reading
            ));
            return Err(e);
        }

        audit_or_warn(
            &cfg.log_path(),
            "add",
            &record.fleet,
            &format!(
                "{} h by {} on {} (entered by {user})",
                format_hours(record.worked_hours),
                record.operator,
                record.date_str()
            ),
        );

        success(format!(
            "Record saved: fleet {} | {} | {} h",
            record.fleet,
            record.operator,
            format_hours(record.worked_hours)
        ));

        Ok(record)
    }
}
