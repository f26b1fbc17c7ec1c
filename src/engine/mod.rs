//! Valuation engine
//!
//! Stateless calculators for package cost, transaction fees, resale value
//! scenarios, profit split, share returns and value projections. Every
//! policy constant is injected through [`EngineConfig`].

mod cost;
mod fees;
mod projection;
mod roi;
mod share;
mod types;
mod valuation;

pub use cost::{CostCalculator, QualityLevel, QualityRates};
pub use fees::{compute_dubai_fees, FeeBreakdown, FeeCalculator, FeeSchedule};
pub use projection::{generate_monthly_projection, projection_series, ProjectionPoint};
pub use roi::{ProfitSplit, RoiResult, RoiSplitter};
pub use share::{ShareCalculator, ShareInvestment, ShareProduct};
pub use types::{EngineError, EngineResult};
pub use valuation::{MarkupPolicy, PropertyValueEstimate, Scenario, ValuationEstimator};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Policy constants for the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rates: QualityRates,
    pub fees: FeeSchedule,
    pub markups: MarkupPolicy,
    pub split: ProfitSplit,
    pub share: ShareProduct,
}

impl EngineConfig {
    /// Reject policies that would break the engine's invariants
    pub fn validate(&self) -> EngineResult<()> {
        self.rates.validate()?;
        self.fees.validate()?;
        self.markups.validate()?;
        self.split.validate()?;
        self.share.validate()?;
        Ok(())
    }
}

/// All engine calculators bound to one policy
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    pub cost: CostCalculator,
    pub fees: FeeCalculator,
    pub valuation: ValuationEstimator,
    pub roi: RoiSplitter,
    pub share: ShareCalculator,
}

impl ValuationEngine {
    /// Build an engine from a validated policy
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            cost: CostCalculator::new(config.rates.clone()),
            fees: FeeCalculator::new(config.fees.clone()),
            valuation: ValuationEstimator::new(config.markups.clone()),
            roi: RoiSplitter::new(config.split.clone()),
            share: ShareCalculator::new(config.share.clone()),
        })
    }

    pub fn compute_total_cost(
        &self,
        square_feet: Decimal,
        level: QualityLevel,
    ) -> EngineResult<Decimal> {
        self.cost.compute_total_cost(square_feet, level)
    }

    pub fn compute_fees(&self, property_value: Decimal) -> EngineResult<FeeBreakdown> {
        self.fees.compute_fees(property_value)
    }

    pub fn estimate_property_values(
        &self,
        initial_value: Decimal,
        total_cost: Decimal,
        market_factor: Decimal,
    ) -> EngineResult<PropertyValueEstimate> {
        self.valuation
            .estimate_property_values(initial_value, total_cost, market_factor)
    }

    pub fn compute_roi_with_split(
        &self,
        initial_investment: Decimal,
        final_value: Decimal,
        total_cost: Decimal,
        holding_period_months: u32,
    ) -> EngineResult<RoiResult> {
        self.roi.compute_roi_with_split(
            initial_investment,
            final_value,
            total_cost,
            holding_period_months,
        )
    }

    pub fn compute_share_investment(
        &self,
        total_investment: Decimal,
        share_amount: Decimal,
        holding_period_months: u32,
    ) -> EngineResult<ShareInvestment> {
        self.share
            .compute_share_investment(total_investment, share_amount, holding_period_months)
    }

    pub fn generate_monthly_projection(
        &self,
        initial_value: Decimal,
        final_value: Decimal,
        months: u32,
    ) -> EngineResult<Vec<Decimal>> {
        generate_monthly_projection(initial_value, final_value, months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_config_rejects_invalid_policy() {
        let mut config = EngineConfig::default();
        config.split.investor_share = dec!(-0.1);

        let err = ValuationEngine::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument {
                field: "investor_share",
                ..
            }
        ));
    }

    #[test]
    fn test_from_config_uses_policy() {
        let mut config = EngineConfig::default();
        config.rates.basic = dec!(100);
        config.fees.conveyance_fee = dec!(0);

        let engine = ValuationEngine::from_config(&config).unwrap();
        assert_eq!(
            engine
                .compute_total_cost(dec!(10), QualityLevel::Basic)
                .unwrap(),
            dec!(1000)
        );
        assert_eq!(
            engine.compute_fees(dec!(0)).unwrap().total_fees,
            dec!(430)
        );
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = ValuationEngine::default();

        let run = || {
            let cost = engine
                .compute_total_cost(dec!(2345), QualityLevel::Luxury)
                .unwrap();
            let values = engine
                .estimate_property_values(dec!(3333333), cost, dec!(0.35))
                .unwrap();
            let roi = engine
                .compute_roi_with_split(dec!(3333333), values.optimistic, cost, 7)
                .unwrap();
            let projection = engine
                .generate_monthly_projection(dec!(3333333), values.optimistic, 7)
                .unwrap();
            (cost, values, roi, projection)
        };

        assert_eq!(run(), run());
    }
}
