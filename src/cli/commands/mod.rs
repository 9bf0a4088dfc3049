pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod fleets;
pub mod init;
pub mod list;
pub mod log;
