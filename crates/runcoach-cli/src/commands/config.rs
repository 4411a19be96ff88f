use clap::Subcommand;
use runcoach_core::Config;

use super::CommandResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "coefficients.threshold_percent")
        key: String,
    },
    /// Set a config value and save it
    Set {
        key: String,
        value: String,
    },
    /// Print the whole configuration as TOML
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
