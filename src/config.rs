//! App configuration baked in at build time.
//!
//! Values come from environment variables visible to `cargo` when the WASM
//! bundle is built (`option_env!`). The browser has no process environment,
//! so nothing is read at runtime.
//!
//! Optional:
//! - `DASHBOARD_BRAND`: product name in the nav bar (default `Rust Dashboard`)
//! - `DASHBOARD_LOG_LEVEL`: `error|warn|info|debug|trace` (default `info`)
//! - `DASHBOARD_MOCK_LATENCY_MS`: one delay for every mock fetch, replacing
//!   the per-page defaults

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use log::Level;

use crate::net::api::MockLatency;

pub const DEFAULT_BRAND: &str = "Rust Dashboard";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

pub const BRAND_KEY: &str = "DASHBOARD_BRAND";
pub const LOG_LEVEL_KEY: &str = "DASHBOARD_LOG_LEVEL";
pub const MOCK_LATENCY_KEY: &str = "DASHBOARD_MOCK_LATENCY_MS";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub brand: String,
    pub log_level: Level,
    pub latency: MockLatency,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
            latency: MockLatency::default(),
        }
    }
}

impl AppConfig {
    /// Build config from whatever `lookup` returns for each key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unparseable log level or latency.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let brand = lookup(BRAND_KEY)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BRAND.to_owned());

        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::Invalid { key: LOG_LEVEL_KEY, value: raw })?,
            None => DEFAULT_LOG_LEVEL,
        };

        let latency = match lookup(MOCK_LATENCY_KEY) {
            Some(raw) => {
                let ms = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid { key: MOCK_LATENCY_KEY, value: raw })?;
                MockLatency::uniform(Duration::from_millis(ms))
            }
            None => MockLatency::default(),
        };

        Ok(Self { brand, log_level, latency })
    }

    /// Config from the variables captured when this crate was compiled.
    ///
    /// # Errors
    ///
    /// See `from_lookup`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                BRAND_KEY => option_env!("DASHBOARD_BRAND"),
                LOG_LEVEL_KEY => option_env!("DASHBOARD_LOG_LEVEL"),
                MOCK_LATENCY_KEY => option_env!("DASHBOARD_MOCK_LATENCY_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Single-letter logo mark for the nav bar.
    pub fn logo_mark(&self) -> String {
        self.brand
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
