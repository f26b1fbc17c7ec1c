use clap::Parser;
use property_sim::cli::{Cli, Commands};
use property_sim::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    property_sim::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Simulate(args) => {
            tracing::info!("Running simulation");
            args.execute(&config)?;
        }
        Commands::Fees(args) => {
            tracing::info!("Computing transaction fees");
            args.execute(&config)?;
        }
        Commands::Share(args) => {
            tracing::info!("Computing share investment");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
