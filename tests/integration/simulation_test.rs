//! Integration tests for the simulation runner

use property_sim::config::{Config, InputLimits};
use property_sim::engine::{QualityLevel, Scenario, ValuationEngine};
use property_sim::simulation::{SimulationError, SimulationInput, Simulator};
use rust_decimal_macros::dec;

fn luxury_input() -> SimulationInput {
    SimulationInput {
        property_value: dec!(2500000),
        square_feet: dec!(3200),
        quality_level: QualityLevel::Luxury,
        market_factor: dec!(0.10),
        holding_period_months: 18,
        scenario: Scenario::Optimistic,
        share_amount: Some(dec!(500000)),
    }
}

#[test]
fn test_luxury_optimistic_run() {
    let report = Simulator::default().run(&luxury_input()).unwrap();

    // 3,200 sq ft at 780
    assert_eq!(report.total_cost, dec!(2496000));
    // base = 2,500,000 + 2,496,000 * 1.10 = 5,245,600; optimistic = base * 1.45
    assert_eq!(report.final_value, dec!(7606120));
    assert_eq!(report.roi.total_investment, dec!(4996000));
    assert_eq!(
        report.roi.investor_profit + report.roi.company_profit,
        report.roi.total_profit
    );
    assert_eq!(report.share.monthly_returns, dec!(2500));
    assert_eq!(report.share.total_returns, dec!(45000));
    assert_eq!(report.projection.len(), 18);
    assert_eq!(
        report.breakdown.initial_investment_pct + report.breakdown.package_cost_pct,
        dec!(100)
    );
}

#[test]
fn test_report_serializes_to_json() {
    let report = Simulator::default().run(&luxury_input()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["selected_scenario"], "optimistic");
    assert_eq!(json["input"]["quality_level"], "luxury");
    assert_eq!(json["estimates"].as_array().unwrap().len(), 3);
    assert_eq!(json["projection"].as_array().unwrap().len(), 18);
    assert!(json["fees"]["total_fees"].is_string());
}

#[test]
fn test_custom_limits_apply() {
    let limits = InputLimits {
        max_holding_months: 120,
        ..InputLimits::default()
    };
    let simulator = Simulator::new(ValuationEngine::default(), limits);

    let input = SimulationInput {
        holding_period_months: 96,
        share_amount: None,
        ..luxury_input()
    };
    let report = simulator.run(&input).unwrap();
    assert_eq!(report.projection.len(), 96);
}

#[test]
fn test_share_below_minimum_rejected() {
    let input = SimulationInput {
        share_amount: Some(dec!(99999)),
        ..luxury_input()
    };
    let err = Simulator::default().run(&input).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::OutOfRange {
            field: "share_amount",
            ..
        }
    ));
}

#[test]
fn test_invalid_policy_rejected_at_construction() {
    let mut config = Config::default();
    config.engine.markups.moderate = dec!(1.50);

    let err = Simulator::from_config(&config).unwrap_err();
    assert!(matches!(err, SimulationError::Engine(_)));
}

#[test]
fn test_repeated_runs_identical() {
    let simulator = Simulator::default();
    let a = simulator.run(&luxury_input()).unwrap();
    let b = simulator.run(&luxury_input()).unwrap();

    assert_eq!(a.final_value, b.final_value);
    assert_eq!(a.roi, b.roi);
    assert_eq!(a.projection, b.projection);
    assert_eq!(a.format_table(), b.format_table());
}
