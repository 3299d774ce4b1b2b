use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Longest accepted lookback window, ten years
pub const MAX_LOOKBACK_DAYS: u32 = 3650;

/// Tunables for one dashboard computation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,

    #[serde(default = "default_qr_min_plan_days")]
    pub qr_min_plan_days: u32,

    #[serde(default = "default_recommended_trainer_count")]
    pub recommended_trainer_count: usize,

    /// Fixed seed for the tip of the day; derived per member and day when unset
    #[serde(default)]
    pub tip_seed: Option<u64>,
}

// Default value functions
fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_lookback_days() -> u32 {
    30
}

fn default_expiring_soon_days() -> i64 {
    7
}

fn default_qr_min_plan_days() -> u32 {
    30
}

fn default_recommended_trainer_count() -> usize {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            expiring_soon_days: default_expiring_soon_days(),
            qr_min_plan_days: default_qr_min_plan_days(),
            recommended_trainer_count: default_recommended_trainer_count(),
            tip_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.dashboard.validate()?;

        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.log_level = log_level;
        }

        let dashboard = &mut self.dashboard;
        if let Some(days) = parse_override(&lookup, "GYM_LOOKBACK_DAYS")? {
            dashboard.lookback_days = days;
        }
        if let Some(days) = parse_override(&lookup, "GYM_EXPIRING_SOON_DAYS")? {
            dashboard.expiring_soon_days = days;
        }
        if let Some(days) = parse_override(&lookup, "GYM_QR_MIN_PLAN_DAYS")? {
            dashboard.qr_min_plan_days = days;
        }
        if let Some(count) = parse_override(&lookup, "GYM_RECOMMENDED_TRAINERS")? {
            dashboard.recommended_trainer_count = count;
        }
        if let Some(seed) = parse_override(&lookup, "GYM_TIP_SEED")? {
            dashboard.tip_seed = Some(seed);
        }

        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days == 0 {
            return Err(ConfigError::EmptyLookbackWindow);
        }
        if self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::LookbackWindowTooLong {
                days: self.lookback_days,
                max: MAX_LOOKBACK_DAYS,
            });
        }
        if self.recommended_trainer_count == 0 {
            return Err(ConfigError::NoRecommendedTrainers);
        }
        Ok(())
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        None => Ok(None),
    }
}
