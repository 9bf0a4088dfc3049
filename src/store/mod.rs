pub mod initialize;
pub mod log;
pub mod records;

pub use records::{RecordStore, append};
