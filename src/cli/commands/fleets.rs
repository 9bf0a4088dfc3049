use crate::config::Config;
use crate::core::query::fleet_options;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;

/// Print the fleet filter choices computed from the current store.
pub fn handle(cfg: &Config, session: &Session) -> AppResult<()> {
    session.require()?;

    let records = RecordStore::new(cfg.store_path()).load()?;
    let options = fleet_options(&records);

    for opt in &options {
        println!("{opt}");
    }

    if records.is_empty() {
        info(format!(
            "No records yet. Known fleets: {}",
            cfg.fleets.join(", ")
        ));
    }

    Ok(())
}
