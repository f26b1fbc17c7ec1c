//! Share command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::engine::ValuationEngine;
use crate::simulation::currency;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Total project investment (purchase price plus package cost)
    #[arg(long)]
    pub total: Decimal,

    /// Amount invested in the project
    #[arg(long)]
    pub amount: Decimal,

    /// Holding period in months
    #[arg(long, default_value = "12")]
    pub months: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ShareArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = ValuationEngine::from_config(&config.engine)?;
        let share = engine.compute_share_investment(self.total, self.amount, self.months)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&share)?),
            OutputFormat::Table => {
                println!("Project Share:   {:.2}%", share.share_percentage);
                println!("Monthly Returns: {}", currency(share.monthly_returns));
                println!(
                    "Total Returns:   {} over {} months",
                    currency(share.total_returns),
                    self.months
                );
                println!("Annual Rate:     {:.2}%", share.effective_annual_return);
            }
        }

        Ok(())
    }
}
