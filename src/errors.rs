//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
//! error handling consistent. Input problems detected while building a record
//! are grouped in ValidationError, which the operator can correct and resubmit.

use std::io;
use thiserror::Error;

/// Rejections produced while turning raw form fields into a record.
/// Rules are checked in declaration order and the first failure wins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid number for {field}: '{value}' (expected a non-negative decimal)")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Final reading cannot be less than initial reading (initial: {initial}, final: {final_reading})")]
    Ordering { initial: f64, final_reading: f64 },

    #[error("Unknown fleet '{0}': not in the configured fleet list")]
    UnknownFleet(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Cannot read record store {path}: {reason}")]
    StoreRead { path: String, reason: String },

    #[error("Cannot write record store {path}: {reason}")]
    StoreWrite { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Access gate
    // ---------------------------
    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
