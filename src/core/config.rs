//! Process configuration from environment variables
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Configurable schedules and catalog override
//! - 1.0.0: Token, store path and log level

use anyhow::Result;

use crate::features::scheduler::Schedule;

pub const DEFAULT_STORE_PATH: &str = "data.json";
pub const DEFAULT_DIGEST_SCHEDULE: &str = "09:00";
pub const DEFAULT_QUIZ_SCHEDULE: &str = "sun 10:00";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Register slash commands on this guild only (development)
    pub discord_guild_id: Option<String>,
    pub store_path: String,
    /// YAML file replacing the built-in catalog
    pub catalog_path: Option<String>,
    pub digest_schedule: Schedule,
    pub quiz_schedule: Schedule,
    pub log_level: String,
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// `DISCORD_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = non_empty("DISCORD_TOKEN")
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable is required"))?;

        let digest_schedule = Schedule::parse(
            &non_empty("DIGEST_SCHEDULE").unwrap_or_else(|| DEFAULT_DIGEST_SCHEDULE.to_string()),
        )?;
        let quiz_schedule = Schedule::parse(
            &non_empty("QUIZ_SCHEDULE").unwrap_or_else(|| DEFAULT_QUIZ_SCHEDULE.to_string()),
        )?;

        Ok(Config {
            discord_token,
            discord_guild_id: non_empty("DISCORD_GUILD_ID"),
            store_path: non_empty("STORE_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.to_string()),
            catalog_path: non_empty("CATALOG_PATH"),
            digest_schedule,
            quiz_schedule,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_TOKEN"));

        assert!(Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.store_path, "data.json");
        assert_eq!(config.log_level, "info");
        assert!(config.discord_guild_id.is_none());
        assert!(config.catalog_path.is_none());
        assert_eq!(
            config.digest_schedule,
            Schedule::Daily {
                at: NaiveTime::from_hms_opt(9, 0, 0).unwrap()
            }
        );
        assert_eq!(
            config.quiz_schedule,
            Schedule::Weekly {
                weekday: Weekday::Sun,
                at: NaiveTime::from_hms_opt(10, 0, 0).unwrap()
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "42"),
            ("STORE_PATH", "/var/lib/lexicon/users.json"),
            ("CATALOG_PATH", "catalog.yaml"),
            ("DIGEST_SCHEDULE", "07:30"),
            ("QUIZ_SCHEDULE", "fri 17:00"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.discord_guild_id.as_deref(), Some("42"));
        assert_eq!(config.store_path, "/var/lib/lexicon/users.json");
        assert_eq!(config.catalog_path.as_deref(), Some("catalog.yaml"));
        assert_eq!(config.digest_schedule.to_string(), "daily at 07:30");
        assert_eq!(config.quiz_schedule.to_string(), "every Fri at 17:00");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_schedule_is_fatal() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("QUIZ_SCHEDULE", "every sunday"),
        ]));
        assert!(result.is_err());
    }
}
