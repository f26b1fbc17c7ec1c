//! Configuration types for property-sim

use crate::engine::EngineConfig;
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub limits: InputLimits,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Input ranges accepted from a user before the engine is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_min_property_value")]
    pub min_property_value: Decimal,
    #[serde(default = "default_max_property_value")]
    pub max_property_value: Decimal,
    #[serde(default = "default_min_square_feet")]
    pub min_square_feet: Decimal,
    #[serde(default = "default_max_square_feet")]
    pub max_square_feet: Decimal,
    #[serde(default = "default_min_holding_months")]
    pub min_holding_months: u32,
    #[serde(default = "default_max_holding_months")]
    pub max_holding_months: u32,
    /// Smallest share ticket; the largest is the project's total investment
    #[serde(default = "default_min_share_amount")]
    pub min_share_amount: Decimal,
}

fn default_min_property_value() -> Decimal {
    dec!(200000)
}
fn default_max_property_value() -> Decimal {
    dec!(50000000)
}
fn default_min_square_feet() -> Decimal {
    dec!(500)
}
fn default_max_square_feet() -> Decimal {
    dec!(10000)
}
fn default_min_holding_months() -> u32 {
    1
}
fn default_max_holding_months() -> u32 {
    60
}
fn default_min_share_amount() -> Decimal {
    dec!(100000)
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_property_value: default_min_property_value(),
            max_property_value: default_max_property_value(),
            min_square_feet: default_min_square_feet(),
            max_square_feet: default_max_square_feet(),
            min_holding_months: default_min_holding_months(),
            max_holding_months: default_max_holding_months(),
            min_share_amount: default_min_share_amount(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
