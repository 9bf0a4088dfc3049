use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::RawRecord;
use crate::utils::date;

/// Record a new reading.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        operator,
        fleet,
        initial,
        final_reading,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Parse date (optional, default = now)
        //
        let parsed_date = match date_arg.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => {
                Some(date::parse_datetime(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?)
            }
            _ => None,
        };

        //
        // 2. Collect raw fields, validation happens in the core
        //
        let raw = RawRecord {
            date: parsed_date,
            operator: operator.clone(),
            fleet: fleet.clone(),
            initial_reading: initial.clone(),
            final_reading: final_reading.clone(),
        };

        //
        // 3. Execute logic
        //
        AddLogic::apply(session, cfg, &raw)?;
    }

    Ok(())
}
