//! Return on investment with investor/company profit split

use super::types::{checked_add, checked_div, checked_mul, checked_sub};
use super::{EngineError, EngineResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Profit split between the investor and the operating company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitSplit {
    /// Investor's fraction of profit; the company keeps the remainder
    pub investor_share: Decimal,
}

impl ProfitSplit {
    pub fn company_share(&self) -> Decimal {
        Decimal::ONE - self.investor_share
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.investor_share < Decimal::ZERO || self.investor_share > Decimal::ONE {
            return Err(EngineError::invalid(
                "investor_share",
                format!("must be within [0, 1], got {}", self.investor_share),
            ));
        }
        Ok(())
    }
}

impl Default for ProfitSplit {
    fn default() -> Self {
        Self {
            investor_share: dec!(0.88),
        }
    }
}

/// Profit and annualized return for a completed flip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Purchase price plus package cost
    pub total_investment: Decimal,
    /// Sale price minus total investment; negative on a loss
    pub total_profit: Decimal,
    pub investor_profit: Decimal,
    pub company_profit: Decimal,
    /// Investor's annualized return in percent
    pub annual_roi: Decimal,
}

/// ROI calculator
#[derive(Debug, Clone, Default)]
pub struct RoiSplitter {
    pub split: ProfitSplit,
}

impl RoiSplitter {
    pub fn new(split: ProfitSplit) -> Self {
        Self { split }
    }

    /// Split profit and annualize the investor's share
    ///
    /// annual_roi = investor_profit / total_investment * (12 / months) * 100
    pub fn compute_roi_with_split(
        &self,
        initial_investment: Decimal,
        final_value: Decimal,
        total_cost: Decimal,
        holding_period_months: u32,
    ) -> EngineResult<RoiResult> {
        if holding_period_months == 0 {
            return Err(EngineError::invalid(
                "holding_period_months",
                "must be at least 1",
            ));
        }

        let total_investment = checked_add(initial_investment, total_cost, "total_cost")?;
        if total_investment.is_zero() {
            return Err(EngineError::invalid(
                "total_investment",
                "initial investment plus package cost must be non-zero",
            ));
        }

        let total_profit = checked_sub(final_value, total_investment, "final_value")?;
        let investor_profit = checked_mul(total_profit, self.split.investor_share, "final_value")?;
        // Remainder, so the two shares always sum to the profit exactly
        let company_profit = checked_sub(total_profit, investor_profit, "final_value")?;

        let months = Decimal::from(holding_period_months);
        let return_ratio = checked_div(investor_profit, total_investment, "total_investment")?;
        let annualized = checked_mul(return_ratio, dec!(12) / months, "total_investment")?;
        let annual_roi = checked_mul(annualized, dec!(100), "total_investment")?;

        tracing::debug!(
            %total_investment,
            %total_profit,
            %investor_profit,
            %annual_roi,
            "Computed ROI split"
        );

        Ok(RoiResult {
            total_investment,
            total_profit,
            investor_profit,
            company_profit,
            annual_roi,
        })
    }
}
