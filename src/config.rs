//! Runtime configuration from environment variables.
//!
//! - `FLAPPY_SEED`: RNG seed for pipe and cloud placement (default: time-derived)
//! - `FLAPPY_TICK_MS`: fixed simulation step in milliseconds (default: 16)
//! - `FLAPPY_LOG_PATH`: write logs to this file (default: logging disabled)
//!
//! Unparseable values fall back to the defaults.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::types::TICK_MS;

/// Longest accepted simulation step.
pub const MAX_TICK_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("FLAPPY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let tick_ms = lookup("FLAPPY_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_MS);

        let log_path = lookup("FLAPPY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_ms > 0, "FLAPPY_TICK_MS must be positive");
        ensure!(
            self.tick_ms <= MAX_TICK_MS,
            "FLAPPY_TICK_MS must be at most {MAX_TICK_MS}, got {}",
            self.tick_ms
        );
        Ok(())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
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
    fn reads_all_variables() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("FLAPPY_SEED", "42"),
            ("FLAPPY_TICK_MS", " 20 "),
            ("FLAPPY_LOG_PATH", "/tmp/flappy.log"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tick_ms, 20);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/flappy.log"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn falls_back_on_garbage() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("FLAPPY_TICK_MS", "fast"),
            ("FLAPPY_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn rejects_out_of_range_tick() {
        let zero = GameConfig::from_lookup(lookup(&[("FLAPPY_TICK_MS", "0")]));
        assert!(zero.validate().is_err());

        let slow = GameConfig::from_lookup(lookup(&[("FLAPPY_TICK_MS", "5000")]));
        let err = slow.validate().unwrap_err();
        assert!(err.to_string().contains("5000"));
    }
}
