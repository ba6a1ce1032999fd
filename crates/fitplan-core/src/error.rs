//! Core error types for fitplan-core.
//!
//! Missing *optional* inputs (activity catalog, rules document, reservation
//! list) are not errors: loaders degrade to empty collections or defaults.
//! Errors here are the fatal cases — unusable date ranges, IO on required
//! files, malformed structured documents.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fitplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date string that could not be parsed as YYYY-MM-DD
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// No usable challenge date range: no explicit range, no configured
    /// range, and no schedule boundaries. Usage error; nothing is written.
    #[error("No challenge date range: pass --start/--end, configure one, or supply a schedule with challenge_start/challenge_end")]
    MissingDateRange,

    /// Log file required but absent
    #[error("Log file not found: {0}")]
    LogNotFound(PathBuf),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
