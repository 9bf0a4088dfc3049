use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::ViewQuery;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::range::parse_range;
use crate::models::FleetFilter;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        fleet,
        range,
        force,
    } = cmd
    {
        let query = ViewQuery {
            fleet: FleetFilter::parse(fleet),
            range: range.as_deref().map(parse_range).transpose()?,
        };

        ExportLogic::export(session, cfg, *format, file.as_deref(), &query, *force)?;
    }
    Ok(())
}
