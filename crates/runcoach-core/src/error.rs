//! Core error types for runcoach-core.
//!
//! Validation failures are recoverable at the command layer: each maps to a
//! user-facing message and aborts only the current command. Storage and IO
//! failures are reported generically and never crash the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runcoach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected by the performance model or the data model
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Message suitable for showing to the athlete who issued the command.
    ///
    /// Storage and IO failures collapse into a single unavailability line;
    /// their details belong in the logs.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation(err) => err.user_message(),
            CoreError::Database(_) | CoreError::Io(_) | CoreError::Json(_) => {
                "Storage is unavailable right now, please try again later.".to_string()
            }
            CoreError::Config(err) => err.to_string(),
        }
    }
}

/// Validation errors raised by the calculation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Time string could not be parsed
    #[error("Invalid time format '{input}': expected mm:ss or hh:mm:ss")]
    InvalidFormat { input: String },

    /// Duration outside the accepted window
    #[error("Implausible duration of {seconds} s: must be between {min} s and {max} s")]
    ImplausibleDuration { seconds: i64, min: i64, max: i64 },

    /// Physiological or model input outside its named bounds
    #[error("Value {value} for '{field}' is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Race time faster than the plausibility floor for its distance
    #[error("Time of {seconds} s for {distance} is faster than the plausibility floor of {floor} s")]
    ImplausibleRecord {
        distance: String,
        seconds: u32,
        floor: u32,
    },

    /// Computation requested before a required profile field is set
    #[error("Missing prerequisite: {what}")]
    MissingPrerequisite { what: String },

    /// Name that matches no known field or session kind
    #[error("Unknown name '{input}': expected {expected}")]
    UnknownName { input: String, expected: String },

    /// Unknown distance class or non-positive distance
    #[error("Invalid distance: {0}")]
    InvalidDistance(String),
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::InvalidFormat { .. } => {
                "Invalid format. Use mm:ss (e.g. 25:30) or hh:mm:ss.".to_string()
            }
            ValidationError::ImplausibleDuration { seconds, max, .. } if seconds > max => {
                "That time looks too long (more than 48h?). Check your input.".to_string()
            }
            ValidationError::ImplausibleDuration { .. } => {
                "Under a minute? Check your input, the format is mm:ss.".to_string()
            }
            ValidationError::OutOfRange { field, value, .. } => {
                format!("The value {value} looks implausible for {field}. Check it.")
            }
            ValidationError::ImplausibleRecord { distance, .. } => {
                format!("Faster than the {distance} world record? Not buying it.")
            }
            ValidationError::MissingPrerequisite { what } => {
                format!("I don't know your {what} yet. Set it first.")
            }
            ValidationError::UnknownName { input, expected } => {
                format!("I don't know '{input}'. Use {expected}.")
            }
            ValidationError::InvalidDistance(_) => {
                "Valid distances: 5k, 10k, semi, marathon.".to_string()
            }
        }
    }
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Stored row does not decode into the data model
    #[error("Corrupt row in '{table}': {message}")]
    CorruptRow { table: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked
                    || err.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
