//! Simulate command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::engine::{QualityLevel, Scenario};
use crate::simulation::{SimulationInput, Simulator};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Initial property value
    #[arg(long, default_value = "1000000")]
    pub value: Decimal,

    /// Property size in square feet
    #[arg(long, default_value = "1500")]
    pub sqft: Decimal,

    /// Package level
    #[arg(long, value_enum, default_value_t = QualityLevel::Basic)]
    pub quality: QualityLevel,

    /// Expected market appreciation in percent (0-100)
    #[arg(long, default_value = "0")]
    pub appreciation: Decimal,

    /// Holding period in months
    #[arg(long, default_value = "12")]
    pub months: u32,

    /// Price scenario used for fees, ROI and the projection
    #[arg(long, value_enum, default_value_t = Scenario::Moderate)]
    pub scenario: Scenario,

    /// Share investment amount (defaults to the whole project)
    #[arg(long)]
    pub share_amount: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SimulateArgs {
    /// Build the simulation input from the parsed flags
    pub fn to_input(&self) -> SimulationInput {
        SimulationInput {
            property_value: self.value,
            square_feet: self.sqft,
            quality_level: self.quality,
            market_factor: SimulationInput::market_factor_from_pct(self.appreciation),
            holding_period_months: self.months,
            scenario: self.scenario,
            share_amount: self.share_amount,
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let simulator = Simulator::from_config(config)?;
        let report = simulator.run(&self.to_input())?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Table => print!("{}", report.format_table()),
        }

        Ok(())
    }
}
