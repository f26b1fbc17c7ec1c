//! End-to-end integration tests

use property_sim::config::Config;
use property_sim::engine::{QualityLevel, Scenario};
use property_sim::simulation::{SimulationInput, Simulator};
use property_sim::telemetry::LogFormat;
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.engine.fees.jurisdiction, "Dubai");
    assert_eq!(config.engine.rates.luxury, dec!(780));
    assert_eq!(config.limits.min_share_amount, dec!(100000));
    assert!(config.engine.validate().is_ok());
}

#[test]
fn test_config_file_drives_simulation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [engine.rates]
        medium = 400

        [engine.fees]
        jurisdiction = "Sharjah"
        land_department_rate = 0.02

        [engine.split]
        investor_share = 0.80

        [telemetry]
        log_format = "json"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.telemetry.log_format, LogFormat::Json);

    let simulator = Simulator::from_config(&config).unwrap();
    let input = SimulationInput {
        property_value: dec!(1000000),
        square_feet: dec!(1000),
        quality_level: QualityLevel::Medium,
        market_factor: dec!(0),
        holding_period_months: 12,
        scenario: Scenario::Moderate,
        share_amount: None,
    };
    let report = simulator.run(&input).unwrap();

    assert_eq!(report.total_cost, dec!(400000));
    assert_eq!(report.final_value, dec!(1750000));
    assert_eq!(report.jurisdiction, "Sharjah");
    assert_eq!(report.fees.dld_fee, dec!(35000));
    assert_eq!(report.fees.broker_fee, dec!(35000));
    assert_eq!(report.roi.total_profit, dec!(350000));
    assert_eq!(report.roi.investor_profit, dec!(280000));
    assert_eq!(report.roi.company_profit, dec!(70000));
    assert_eq!(report.roi.annual_roi, dec!(20));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.engine, config.engine);
    assert_eq!(parsed.limits, config.limits);
}
