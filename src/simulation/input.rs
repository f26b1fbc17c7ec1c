//! Simulation inputs and range checks

use super::SimulationError;
use crate::config::InputLimits;
use crate::engine::{QualityLevel, Scenario};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Parameters collected from the user for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Current property value (purchase price)
    pub property_value: Decimal,
    pub square_feet: Decimal,
    pub quality_level: QualityLevel,
    /// Expected appreciation as a fraction (0.05 = 5%)
    pub market_factor: Decimal,
    pub holding_period_months: u32,
    /// Scenario used for fees, ROI and the projection
    pub scenario: Scenario,
    /// Share ticket; `None` means the whole project
    pub share_amount: Option<Decimal>,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            property_value: dec!(1000000),
            square_feet: dec!(1500),
            quality_level: QualityLevel::Basic,
            market_factor: dec!(0),
            holding_period_months: 12,
            scenario: Scenario::Moderate,
            share_amount: None,
        }
    }
}

impl SimulationInput {
    /// Convert an appreciation percentage (0-100) into a market factor
    pub fn market_factor_from_pct(pct: Decimal) -> Decimal {
        pct / dec!(100)
    }

    /// Check the inputs the engine does not bound itself
    pub fn validate(&self, limits: &InputLimits) -> Result<(), SimulationError> {
        check_range(
            "property_value",
            self.property_value,
            limits.min_property_value,
            limits.max_property_value,
        )?;
        check_range(
            "square_feet",
            self.square_feet,
            limits.min_square_feet,
            limits.max_square_feet,
        )?;
        check_range(
            "holding_period_months",
            Decimal::from(self.holding_period_months),
            Decimal::from(limits.min_holding_months),
            Decimal::from(limits.max_holding_months),
        )?;
        Ok(())
    }

    /// Share ticket to price, checked against the project's total investment
    pub fn resolve_share_amount(
        &self,
        total_investment: Decimal,
        limits: &InputLimits,
    ) -> Result<Decimal, SimulationError> {
        match self.share_amount {
            None => Ok(total_investment),
            Some(amount) => {
                check_range(
                    "share_amount",
                    amount,
                    limits.min_share_amount,
                    total_investment,
                )?;
                Ok(amount)
            }
        }
    }
}

pub(super) fn check_range(
    field: &'static str,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Result<(), SimulationError> {
    if value < min || value > max {
        tracing::warn!(field, %value, %min, %max, "Input out of range");
        return Err(SimulationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
