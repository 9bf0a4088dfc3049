pub mod fleet_filter;
pub mod raw_record;
pub mod record;
pub mod summary;

pub use fleet_filter::{ALL_FLEETS, FleetFilter};
pub use raw_record::RawRecord;
pub use record::{COLUMNS, Record};
pub use summary::Summary;
