//! CLI interface for property-sim
//!
//! Provides subcommands for:
//! - `simulate`: Run a full investment simulation
//! - `fees`: Itemize transaction fees for a property value
//! - `share`: Price a share investment in a project
//! - `config`: Show the effective configuration

mod fees;
mod share;
mod simulate;

pub use fees::FeesArgs;
pub use share::ShareArgs;
pub use simulate::SimulateArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "property-sim")]
#[command(about = "Real estate renovation and resale investment simulator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full investment simulation
    Simulate(SimulateArgs),
    /// Itemize transaction fees for a property value
    Fees(FeesArgs),
    /// Price a share investment in a project
    Share(ShareArgs),
    /// Show the effective configuration
    Config,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
