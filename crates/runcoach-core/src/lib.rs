//! # runcoach Core Library
//!
//! Running performance calculations and athlete record keeping. The CLI
//! binary is a thin command layer over this crate; any other front end
//! (a chat bot, a web service) would call the same API.
//!
//! ## Architecture
//!
//! - **Time codec**: parses `mm:ss` / `hh:mm:ss` input and formats durations
//! - **Performance model**: pure formulas for MAS, VO2max, Riegel
//!   predictions, pace tables and heart-rate reserve zones
//! - **Athlete model**: profiles, race records and the training log
//! - **Storage**: the [`AthleteStore`] contract with in-memory and SQLite
//!   implementations, plus TOML configuration
//!
//! ## Key Components
//!
//! - [`Coach`]: record keeping and profile-aware calculations
//! - [`Database`]: SQLite persistence
//! - [`Config`]: application configuration management

pub mod athlete;
pub mod coach;
pub mod error;
pub mod performance;
pub mod storage;
pub mod time_codec;
pub mod workout;

pub use athlete::{
    AthleteCard, AthleteProfile, DistanceClass, LeaderboardEntry, PhysioField, RaceOutcome,
    RaceRecord, TrainingLogEntry, UserId,
};
pub use coach::Coach;
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use performance::{Coefficients, HeartRateZone, PaceZone};
pub use storage::{AthleteStore, Config, Database, MemoryStore};
pub use time_codec::{format_time, parse_time};
pub use workout::{suggest_workout, SessionKind, WorkoutSuggestion};
