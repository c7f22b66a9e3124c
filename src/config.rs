//! Runtime configuration for the terminal game, read from the environment.
//!
//! | Variable             | Meaning                               | Default        |
//! |----------------------|---------------------------------------|----------------|
//! | `BLOCKFALL_SEED`     | piece sequence seed (u32)             | random         |
//! | `BLOCKFALL_TICK_MS`  | gravity interval in milliseconds (≥1) | 500            |
//! | `BLOCKFALL_LOG_PATH` | append one line per locked piece      | no log         |
//!
//! Invalid values fall back to the default and leave a warning behind for the
//! caller to print.

use crate::types::TICK_MS;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_TICK_MS: &str = "BLOCKFALL_TICK_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// None means pick one at startup.
    pub seed: Option<u32>,
    pub tick_ms: u32,
    pub log_path: Option<String>,
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(ENV_SEED)) {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("{}={:?} is not a u32, using a random seed", ENV_SEED, raw)),
            }
        }

        if let Some(raw) = non_empty(lookup(ENV_TICK_MS)) {
            match raw.parse::<u32>() {
                Ok(ms) if ms >= 1 => config.tick_ms = ms,
                _ => config.warnings.push(format!(
                    "{}={:?} must be a positive integer, using {}",
                    ENV_TICK_MS, raw, TICK_MS
                )),
            }
        }

        config.log_path = non_empty(lookup(ENV_LOG_PATH));
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_ms, 500);
    }

    #[test]
    fn valid_values_are_used() {
        let config = Config::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_TICK_MS, " 250 "),
            (ENV_LOG_PATH, "/tmp/blockfall.log"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let config = Config::from_lookup(lookup(&[
            (ENV_SEED, "-1"),
            (ENV_TICK_MS, "0"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.log_path, None);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains(ENV_SEED));
        assert!(config.warnings[1].contains(ENV_TICK_MS));
    }
}
