//! TOML-based application configuration.
//!
//! Stores:
//! - The default athlete identity used by the CLI
//! - Model coefficients (threshold percentage, Riegel exponent)
//! - Leaderboard defaults
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::performance::Coefficients;

/// Identity the CLI acts as when `--user` is not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteConfig {
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub athlete: AthleteConfig,
    #[serde(default)]
    pub coefficients: Coefficients,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

fn default_user_id() -> i64 {
    1
}
fn default_display_name() -> String {
    "runner".into()
}
fn default_limit() -> usize {
    10
}

impl Default for AthleteConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            display_name: default_display_name(),
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |current, part| current.get(part))
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        let parent = match parent_path {
            Some(path) => path
                .split('.')
                .try_fold(&mut *root, |current, part| current.get_mut(part))
                .ok_or_else(unknown)?,
            None => root,
        };
        let obj = parent.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(n) if n.is_f64() => value
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
            serde_json::Value::Number(_) => value
                .parse::<i64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?,
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(invalid("cannot replace a whole section".to_string()));
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing and returning the default when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds coefficients outside their bounds, or if the default config
    /// cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Self = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::get_json_value_by_path(&json, key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse as
    /// the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject coefficients the model cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.coefficients.threshold_percent;
        if !(50.0..=110.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                key: "coefficients.threshold_percent".to_string(),
                message: format!("{threshold} is outside 50-110"),
            });
        }
        let exponent = self.coefficients.riegel_exponent;
        if !(1.0..=1.2).contains(&exponent) {
            return Err(ConfigError::InvalidValue {
                key: "coefficients.riegel_exponent".to_string(),
                message: format!("{exponent} is outside 1.0-1.2"),
            });
        }
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("using default configuration: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.coefficients.threshold_percent, 89.0);
        assert_eq!(parsed.leaderboard.default_limit, 10);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[coefficients]\nthreshold_percent = 90.0\n").unwrap();
        assert_eq!(parsed.coefficients.threshold_percent, 90.0);
        assert_eq!(parsed.coefficients.riegel_exponent, 1.06);
        assert_eq!(parsed.athlete.display_name, "runner");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("athlete.display_name").as_deref(), Some("runner"));
        assert_eq!(cfg.get("leaderboard.default_limit").as_deref(), Some("10"));
        assert!(cfg.get("athlete.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set("coefficients.threshold_percent", "90").unwrap();
        cfg.set("athlete.user_id", "42").unwrap();
        cfg.set("athlete.display_name", "Ana").unwrap();
        assert_eq!(cfg.coefficients.threshold_percent, 90.0);
        assert_eq!(cfg.athlete.user_id, 42);
        assert_eq!(cfg.athlete.display_name, "Ana");
    }

    #[test]
    fn set_rejects_unknown_and_invalid() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("athlete.weight", "70"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.set("athlete.user_id", "abc").is_err());
        assert!(cfg.set("coefficients.threshold_percent", "500").is_err());
        assert!(cfg.set("athlete", "x").is_err());
        assert_eq!(cfg.coefficients.threshold_percent, 89.0);
    }

    #[test]
    fn load_from_writes_default_when_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.leaderboard.default_limit, 10);
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.set("leaderboard.default_limit", "5").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().leaderboard.default_limit, 5);
    }

    #[test]
    fn load_from_rejects_out_of_bounds_coefficients() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[coefficients]\nriegel_exponent = 5.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "coefficients.riegel_exponent"
        ));

        std::fs::write(&path, "[coefficients]\nthreshold_percent = 0.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
