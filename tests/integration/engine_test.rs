//! Integration tests for the valuation engine

use property_sim::engine::{
    compute_dubai_fees, generate_monthly_projection, EngineError, QualityLevel, ValuationEngine,
};
use rust_decimal_macros::dec;

#[test]
fn test_reference_flip_end_to_end() {
    let engine = ValuationEngine::default();

    let total_cost = engine
        .compute_total_cost(dec!(1500), QualityLevel::Medium)
        .unwrap();
    assert_eq!(total_cost, dec!(570000));

    let values = engine
        .estimate_property_values(dec!(1000000), total_cost, dec!(0))
        .unwrap();
    assert_eq!(values.moderate, dec!(1962500));

    let roi = engine
        .compute_roi_with_split(dec!(1000000), values.moderate, total_cost, 12)
        .unwrap();
    assert_eq!(roi.total_investment, dec!(1570000));
    assert_eq!(roi.total_profit, dec!(392500));
    assert_eq!(roi.investor_profit, dec!(345400));
    assert_eq!(roi.annual_roi, dec!(22.0));

    let fees = engine.compute_fees(values.moderate).unwrap();
    assert_eq!(fees, compute_dubai_fees(values.moderate).unwrap());

    let share = engine
        .compute_share_investment(roi.total_investment, dec!(157000), 12)
        .unwrap();
    assert_eq!(share.share_percentage, dec!(10));
    assert_eq!(share.effective_annual_return, dec!(6.0));

    let projection = engine
        .generate_monthly_projection(dec!(1000000), values.moderate, 12)
        .unwrap();
    assert_eq!(projection.first(), Some(&dec!(1000000)));
    assert_eq!(projection.last(), Some(&dec!(1962500)));
}

#[test]
fn test_fee_schedule_at_zero() {
    let fees = compute_dubai_fees(dec!(0)).unwrap();
    assert_eq!(fees.total_fees, dec!(7780));
}

#[test]
fn test_projection_reference_points() {
    assert_eq!(
        generate_monthly_projection(dec!(7), dec!(9), 1).unwrap(),
        vec![dec!(7)]
    );
    assert_eq!(
        generate_monthly_projection(dec!(100), dec!(200), 3).unwrap(),
        vec![dec!(100), dec!(150), dec!(200)]
    );
}

#[test]
fn test_failures_leave_engine_usable() {
    let engine = ValuationEngine::default();

    let err = engine
        .compute_roi_with_split(dec!(0), dec!(0), dec!(0), 12)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument { .. }));

    let roi = engine
        .compute_roi_with_split(dec!(100), dec!(110), dec!(0), 12)
        .unwrap();
    assert_eq!(roi.total_profit, dec!(10));
}

#[test]
fn test_quality_level_from_user_text() {
    let engine = ValuationEngine::default();
    let level: QualityLevel = "LUXURY".parse().unwrap();
    assert_eq!(
        engine.compute_total_cost(dec!(1000), level).unwrap(),
        dec!(780000)
    );

    let err = "gold".parse::<QualityLevel>().unwrap_err();
    assert!(err.to_string().contains("quality_level"));
}
