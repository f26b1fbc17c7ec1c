//! Renovation package cost calculation

use super::types::checked_mul;
use super::{EngineError, EngineResult};
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Renovation/finish package tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// Basic finishes
    Basic,
    /// Mid-range finishes
    Medium,
    /// Luxury finishes
    Luxury,
}

impl QualityLevel {
    /// All tiers, cheapest first
    pub const ALL: [QualityLevel; 3] = [Self::Basic, Self::Medium, Self::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Medium => "medium",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            EngineError::invalid(
                "quality_level",
                format!("unrecognized tier '{}', expected basic, medium or luxury", name),
            )
        })
    }
}

/// Per-square-foot package rates by tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityRates {
    pub basic: Decimal,
    pub medium: Decimal,
    pub luxury: Decimal,
}

impl QualityRates {
    /// Rate for a tier
    pub fn rate(&self, level: QualityLevel) -> Decimal {
        match level {
            QualityLevel::Basic => self.basic,
            QualityLevel::Medium => self.medium,
            QualityLevel::Luxury => self.luxury,
        }
    }

    /// Check every configured rate is positive
    pub fn validate(&self) -> EngineResult<()> {
        for level in QualityLevel::ALL {
            let rate = self.rate(level);
            if rate <= Decimal::ZERO {
                return Err(EngineError::invalid(
                    "rates",
                    format!("{} rate must be positive, got {}", level, rate),
                ));
            }
        }
        Ok(())
    }
}

impl Default for QualityRates {
    fn default() -> Self {
        Self {
            basic: dec!(300),
            medium: dec!(380),
            luxury: dec!(780),
        }
    }
}

/// Package cost calculator
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    pub rates: QualityRates,
}

impl CostCalculator {
    /// Create a calculator with the given rate table
    pub fn new(rates: QualityRates) -> Self {
        Self { rates }
    }

    /// Per-square-foot rate for a tier
    pub fn rate_for(&self, level: QualityLevel) -> Decimal {
        self.rates.rate(level)
    }

    /// Total package cost: square footage times the tier rate
    pub fn compute_total_cost(
        &self,
        square_feet: Decimal,
        level: QualityLevel,
    ) -> EngineResult<Decimal> {
        if square_feet <= Decimal::ZERO {
            return Err(EngineError::invalid(
                "square_feet",
                format!("must be positive, got {}", square_feet),
            ));
        }

        let total = checked_mul(square_feet, self.rate_for(level), "square_feet")?;
        tracing::debug!(%square_feet, %level, %total, "Computed package cost");
        Ok(total)
    }
}
