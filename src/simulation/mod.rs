//! Simulation runner
//!
//! Validates user inputs against the configured limits, then drives the
//! valuation engine through one full run: package cost, resale scenarios,
//! fees on the selected scenario, profit split, share returns, and the
//! monthly projection.

mod input;
mod report;

pub use input::SimulationInput;
pub use report::{
    currency, signed_currency, InvestmentBreakdown, ScenarioEstimate, SimulationReport, CURRENCY,
};

use crate::config::{Config, InputLimits};
use crate::engine::{projection_series, EngineError, ValuationEngine};
use rust_decimal::Decimal;
use thiserror::Error;

/// Simulation errors
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A user input fell outside the accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },
    /// The engine rejected an argument
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Runs simulations against one engine policy and input limits
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    pub engine: ValuationEngine,
    pub limits: InputLimits,
}

impl Simulator {
    pub fn new(engine: ValuationEngine, limits: InputLimits) -> Self {
        Self { engine, limits }
    }

    /// Create from the application configuration
    pub fn from_config(config: &Config) -> Result<Self, SimulationError> {
        let engine = ValuationEngine::from_config(&config.engine)?;
        Ok(Self::new(engine, config.limits.clone()))
    }

    /// Run a full simulation
    pub fn run(&self, input: &SimulationInput) -> Result<SimulationReport, SimulationError> {
        input.validate(&self.limits)?;
        let engine = &self.engine;

        let package_rate = engine.cost.rate_for(input.quality_level);
        let total_cost = engine.compute_total_cost(input.square_feet, input.quality_level)?;

        let values = engine.estimate_property_values(
            input.property_value,
            total_cost,
            input.market_factor,
        )?;
        let estimates = values
            .iter()
            .map(|(scenario, value)| {
                Ok(ScenarioEstimate {
                    scenario,
                    value,
                    total_markup_pct: engine
                        .valuation
                        .total_markup_pct(scenario, input.market_factor)?,
                    gain: value - input.property_value,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        let final_value = values.get(input.scenario);

        let fees = engine.compute_fees(final_value)?;
        let roi = engine.compute_roi_with_split(
            input.property_value,
            final_value,
            total_cost,
            input.holding_period_months,
        )?;

        let share_amount = input.resolve_share_amount(roi.total_investment, &self.limits)?;
        let share = engine.compute_share_investment(
            roi.total_investment,
            share_amount,
            input.holding_period_months,
        )?;

        let projection = projection_series(
            input.property_value,
            final_value,
            input.holding_period_months,
        )?;
        let breakdown = InvestmentBreakdown::new(input.property_value, total_cost);

        tracing::info!(
            scenario = %input.scenario,
            %total_cost,
            %final_value,
            annual_roi = %roi.annual_roi,
            "Simulation complete"
        );

        Ok(SimulationReport {
            input: input.clone(),
            package_rate,
            total_cost,
            estimates,
            selected_scenario: input.scenario,
            final_value,
            jurisdiction: engine.fees.schedule.jurisdiction.clone(),
            fees,
            roi,
            share_amount,
            share,
            projection,
            breakdown,
        })
    }
}
