//! Monthly value projection

use super::types::{checked_add, checked_div, checked_mul, checked_sub};
use super::{EngineError, EngineResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the value-over-time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month number
    pub month: u32,
    pub value: Decimal,
}

/// Linearly interpolate `months` values from `initial_value` to `final_value` inclusive
///
/// A single month yields `[initial_value]`. The last point is exactly
/// `final_value` for any longer series.
pub fn generate_monthly_projection(
    initial_value: Decimal,
    final_value: Decimal,
    months: u32,
) -> EngineResult<Vec<Decimal>> {
    if months == 0 {
        return Err(EngineError::invalid("months", "must be at least 1"));
    }
    if months == 1 {
        return Ok(vec![initial_value]);
    }

    let last = months - 1;
    let span = checked_sub(final_value, initial_value, "final_value")?;
    let step = checked_div(span, Decimal::from(last), "months")?;

    let mut values = (0..last)
        .map(|i| {
            let offset = checked_mul(step, Decimal::from(i), "final_value")?;
            checked_add(initial_value, offset, "final_value")
        })
        .collect::<EngineResult<Vec<_>>>()?;
    values.push(final_value);

    Ok(values)
}

/// Projection paired with month numbers for charting
pub fn projection_series(
    initial_value: Decimal,
    final_value: Decimal,
    months: u32,
) -> EngineResult<Vec<ProjectionPoint>> {
    let values = generate_monthly_projection(initial_value, final_value, months)?;
    Ok(values
        .into_iter()
        .zip(1..)
        .map(|(value, month)| ProjectionPoint { month, value })
        .collect())
}
