mod config;
pub mod database;
pub mod memory;
pub mod migrations;
pub mod store;

pub use config::{AthleteConfig, Config, LeaderboardConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use store::AthleteStore;

use std::path::PathBuf;

/// Returns the runcoach data directory, creating it if needed.
///
/// `RUNCOACH_HOME` overrides the location. Otherwise this is
/// `~/.config/runcoach[-dev]/`, with the `-dev` suffix when
/// `RUNCOACH_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("RUNCOACH_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("RUNCOACH_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("runcoach-dev")
            } else {
                base_dir.join("runcoach")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
