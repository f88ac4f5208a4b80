use std::str::FromStr;

use crate::server::{
    engine::{EnginePolicy, ReorderPolicy, TombstonePolicy},
    error::{config::ConfigError, AppError},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Allowed browser origin; any origin when unset.
    pub cors_origin: Option<String>,
    pub policy: EnginePolicy,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value understood
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A policy variable has an unknown value
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()),
            policy: EnginePolicy {
                tombstoned_names: parse_or_default::<TombstonePolicy>(&lookup, "TOMBSTONED_NAMES")?,
                reorder: parse_or_default::<ReorderPolicy>(&lookup, "REORDER_POLICY")?,
            },
        })
    }
}

fn parse_or_default<T: FromStr + Default>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(T::default()),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_is_set() {
        let config = load(&[("DATABASE_URL", "sqlite://club.db?mode=rwc")]).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert!(config.cors_origin.is_none());
        assert_eq!(config.policy, EnginePolicy::default());
    }

    #[test]
    fn missing_database_url_is_reported() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::MissingEnvVar(name)) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn policies_are_read_case_insensitively() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TOMBSTONED_NAMES", "Release"),
            ("REORDER_POLICY", "TRUSTING"),
        ])
        .unwrap();

        assert_eq!(config.policy.tombstoned_names, TombstonePolicy::Release);
        assert_eq!(config.policy.reorder, ReorderPolicy::Trusting);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(matches!(
            load(&[("DATABASE_URL", "sqlite::memory:"), ("REORDER_POLICY", "lenient")]),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
