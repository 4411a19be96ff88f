//! Subcommand handlers and the helpers they share.

pub mod calc;
pub mod config;
pub mod log;
pub mod profile;
pub mod record;
pub mod time;
pub mod workout;

use clap::Args;
use runcoach_core::{
    AthleteStore, Coach, Config, CoreError, Database, MemoryStore, UserId, ValidationError,
};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Who the command acts as and where their data lives.
#[derive(Args, Debug, Clone)]
pub struct AthleteArgs {
    /// Athlete id (defaults to config `athlete.user_id`)
    #[arg(long, global = true)]
    pub user: Option<i64>,

    /// Display name stored with the profile (defaults to config `athlete.display_name`)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Use a throwaway in-memory store instead of the database
    #[arg(long, global = true)]
    pub memory: bool,
}

pub struct Session {
    pub coach: Coach<Box<dyn AthleteStore>>,
    pub user_id: UserId,
    pub display_name: String,
    pub config: Config,
}

impl Session {
    pub fn open(args: &AthleteArgs) -> Result<Self, CoreError> {
        let config = Config::load_or_default();
        let store: Box<dyn AthleteStore> = if args.memory {
            Box::new(MemoryStore::new())
        } else {
            Box::new(Database::open()?)
        };
        Ok(Self {
            coach: Coach::with_coefficients(store, config.coefficients),
            user_id: UserId(args.user.unwrap_or(config.athlete.user_id)),
            display_name: args
                .name
                .clone()
                .unwrap_or_else(|| config.athlete.display_name.clone()),
            config,
        })
    }
}

/// Message shown to the user for a failed command.
pub fn user_message(err: &(dyn std::error::Error + 'static)) -> String {
    if let Some(core) = err.downcast_ref::<CoreError>() {
        return core.user_message();
    }
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return validation.user_message();
    }
    err.to_string()
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
