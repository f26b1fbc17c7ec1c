//! Fees command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::engine::ValuationEngine;
use crate::simulation::currency;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct FeesArgs {
    /// Property sale value
    #[arg(long)]
    pub value: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl FeesArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::from_config(&config.engine)?;
        let fees = engine.compute_fees(self.value)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fees)?),
            OutputFormat::Table => {
                println!("{} fees on {}", config.engine.fees.jurisdiction, currency(self.value));
                println!("  DLD Fee:        {}", currency(fees.dld_fee));
                println!("  Broker Fee:     {}", currency(fees.broker_fee));
                println!("  Title Deed Fee: {}", currency(fees.title_deed_fee));
                println!("  Conveyance Fee: {}", currency(fees.conveyance_fee));
                println!("  Total Fees:     {}", currency(fees.total_fees));
            }
        }

        Ok(())
    }
}
