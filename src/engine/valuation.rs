//! Post-renovation resale value scenarios

use super::types::{checked_add, checked_mul, checked_sub};
use super::{EngineError, EngineResult};
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Valuation scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    Moderate,
    Optimistic,
}

impl Scenario {
    /// All scenarios, lowest markup first
    pub const ALL: [Scenario; 3] = [Self::Conservative, Self::Moderate, Self::Optimistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            EngineError::invalid(
                "scenario",
                format!(
                    "unrecognized scenario '{}', expected conservative, moderate or optimistic",
                    name
                ),
            )
        })
    }
}

/// Base markup multiplier for each scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupPolicy {
    pub conservative: Decimal,
    pub moderate: Decimal,
    pub optimistic: Decimal,
}

impl MarkupPolicy {
    pub fn markup(&self, scenario: Scenario) -> Decimal {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Moderate => self.moderate,
            Scenario::Optimistic => self.optimistic,
        }
    }

    /// Markups must be strictly increasing from conservative to optimistic
    pub fn validate(&self) -> EngineResult<()> {
        if self.conservative < Decimal::ZERO {
            return Err(EngineError::invalid(
                "markups",
                format!("conservative must be non-negative, got {}", self.conservative),
            ));
        }
        if !(self.conservative < self.moderate && self.moderate < self.optimistic) {
            return Err(EngineError::invalid(
                "markups",
                format!(
                    "expected conservative < moderate < optimistic, got {} / {} / {}",
                    self.conservative, self.moderate, self.optimistic
                ),
            ));
        }
        Ok(())
    }
}

impl Default for MarkupPolicy {
    fn default() -> Self {
        Self {
            conservative: dec!(1.15),
            moderate: dec!(1.25),
            optimistic: dec!(1.35),
        }
    }
}

/// Estimated resale value under each scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValueEstimate {
    pub conservative: Decimal,
    pub moderate: Decimal,
    pub optimistic: Decimal,
}

impl PropertyValueEstimate {
    /// Value for a scenario
    pub fn get(&self, scenario: Scenario) -> Decimal {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Moderate => self.moderate,
            Scenario::Optimistic => self.optimistic,
        }
    }

    /// Scenario/value pairs, lowest markup first
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, Decimal)> + '_ {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Resale value estimator
#[derive(Debug, Clone, Default)]
pub struct ValuationEstimator {
    pub markups: MarkupPolicy,
}

impl ValuationEstimator {
    pub fn new(markups: MarkupPolicy) -> Self {
        Self { markups }
    }

    /// Estimate resale values for all three scenarios
    ///
    /// The renovation adds `total_cost * (1 + market_factor)` to the initial
    /// value; each scenario then applies `markup + market_factor` to that base.
    pub fn estimate_property_values(
        &self,
        initial_value: Decimal,
        total_cost: Decimal,
        market_factor: Decimal,
    ) -> EngineResult<PropertyValueEstimate> {
        check_market_factor(market_factor)?;
        if initial_value < Decimal::ZERO {
            return Err(EngineError::invalid(
                "initial_value",
                format!("must be non-negative, got {}", initial_value),
            ));
        }

        let value_increase = checked_mul(total_cost, Decimal::ONE + market_factor, "total_cost")?;
        let base_value = checked_add(initial_value, value_increase, "total_cost")?;
        // Scenario ordering only holds on a positive base
        if base_value <= Decimal::ZERO {
            return Err(EngineError::invalid(
                "total_cost",
                format!("post-renovation base value must be positive, got {}", base_value),
            ));
        }

        let scenario_value = |markup: Decimal| {
            let multiplier = checked_add(markup, market_factor, "markups")?;
            checked_mul(base_value, multiplier, "initial_value")
        };
        let estimate = PropertyValueEstimate {
            conservative: scenario_value(self.markups.conservative)?,
            moderate: scenario_value(self.markups.moderate)?,
            optimistic: scenario_value(self.markups.optimistic)?,
        };

        tracing::debug!(
            %base_value,
            conservative = %estimate.conservative,
            moderate = %estimate.moderate,
            optimistic = %estimate.optimistic,
            "Estimated property values"
        );

        Ok(estimate)
    }

    /// Headline uplift percentage for a scenario, e.g. 25 for moderate with no appreciation
    pub fn total_markup_pct(
        &self,
        scenario: Scenario,
        market_factor: Decimal,
    ) -> EngineResult<Decimal> {
        let uplift = checked_sub(self.markups.markup(scenario), Decimal::ONE, "markups")?;
        let uplift = checked_add(uplift, market_factor, "markups")?;
        checked_mul(uplift, dec!(100), "markups")
    }
}

fn check_market_factor(market_factor: Decimal) -> EngineResult<()> {
    if market_factor < Decimal::ZERO || market_factor > Decimal::ONE {
        return Err(EngineError::invalid(
            "market_factor",
            format!("must be within [0, 1], got {}", market_factor),
        ));
    }
    Ok(())
}
