use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{ViewQuery, build_view};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::{COLUMNS, FleetFilter};
use crate::store::RecordStore;
use crate::ui::messages::{header, info, total};
use crate::utils::format_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::List { fleet, range } = cmd {
        session.require()?;

        let query = ViewQuery {
            fleet: FleetFilter::parse(fleet),
            range: range.as_deref().map(parse_range).transpose()?,
        };

        let records = RecordStore::new(cfg.store_path()).load()?;
        let view = build_view(&records, &query);

        if view.records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        header(format!("Horimeter records (fleet: {})", query.fleet));

        let mut table = Table::new(vec![
            Column::left(COLUMNS[0]),
            Column::left(COLUMNS[1]),
            Column::left(COLUMNS[2]),
            Column::right(COLUMNS[3]),
            Column::right(COLUMNS[4]),
            Column::right(COLUMNS[5]),
        ]);
        for r in &view.records {
            table.add_row(r.to_row());
        }
        print!("{}", table.render());
        println!();

        total("Records", view.summary.count);
        total(
            "Total worked hours",
            format!("{} h", format_hours(view.summary.total_hours)),
        );
    }
    Ok(())
}
