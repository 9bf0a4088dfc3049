pub mod add;
pub mod backup;
pub mod log;
pub mod query;
pub mod session;
pub mod validate;
