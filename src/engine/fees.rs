//! Government and transaction fee calculation
//!
//! Fee rates are jurisdiction policy, carried by a [`FeeSchedule`] so another
//! market can be priced by swapping the schedule rather than the code.

use super::types::{checked_add, checked_mul};
use super::{EngineError, EngineResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Transaction fee policy for one jurisdiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Jurisdiction label
    pub jurisdiction: String,
    /// Land department transfer fee as a fraction of property value
    pub land_department_rate: Decimal,
    /// Broker commission as a fraction of property value
    pub broker_rate: Decimal,
    /// Fixed title deed issuance fee
    pub title_deed_fee: Decimal,
    /// Fixed conveyance fee
    pub conveyance_fee: Decimal,
}

impl FeeSchedule {
    /// Dubai Land Department schedule
    pub fn dubai() -> Self {
        Self {
            jurisdiction: "Dubai".to_string(),
            land_department_rate: dec!(0.04),
            broker_rate: dec!(0.02),
            title_deed_fee: dec!(430),
            conveyance_fee: dec!(7350),
        }
    }

    /// Check rates and fixed fees are non-negative
    pub fn validate(&self) -> EngineResult<()> {
        let values = [
            ("land_department_rate", self.land_department_rate),
            ("broker_rate", self.broker_rate),
            ("title_deed_fee", self.title_deed_fee),
            ("conveyance_fee", self.conveyance_fee),
        ];
        for (name, value) in values {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid(
                    "fees",
                    format!("{} must be non-negative, got {}", name, value),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::dubai()
    }
}

/// Itemized fees for a property transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Land department fee (the DLD fee under the Dubai schedule)
    pub dld_fee: Decimal,
    pub broker_fee: Decimal,
    pub title_deed_fee: Decimal,
    pub conveyance_fee: Decimal,
    /// Sum of the four fees above
    pub total_fees: Decimal,
}

/// Fee calculator bound to a schedule
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    pub schedule: FeeSchedule,
}

impl FeeCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    /// Itemize fees for a sale at `property_value`
    pub fn compute_fees(&self, property_value: Decimal) -> EngineResult<FeeBreakdown> {
        if property_value < Decimal::ZERO {
            return Err(EngineError::invalid(
                "property_value",
                format!("must be non-negative, got {}", property_value),
            ));
        }

        let s = &self.schedule;
        let dld_fee = checked_mul(property_value, s.land_department_rate, "property_value")?;
        let broker_fee = checked_mul(property_value, s.broker_rate, "property_value")?;
        let total_fees = [broker_fee, s.title_deed_fee, s.conveyance_fee]
            .into_iter()
            .try_fold(dld_fee, |acc, fee| checked_add(acc, fee, "property_value"))?;

        tracing::debug!(
            jurisdiction = %s.jurisdiction,
            %property_value,
            %total_fees,
            "Computed transaction fees"
        );

        Ok(FeeBreakdown {
            dld_fee,
            broker_fee,
            title_deed_fee: s.title_deed_fee,
            conveyance_fee: s.conveyance_fee,
            total_fees,
        })
    }
}

/// Fees under the default Dubai schedule
pub fn compute_dubai_fees(property_value: Decimal) -> EngineResult<FeeBreakdown> {
    FeeCalculator::new(FeeSchedule::dubai()).compute_fees(property_value)
}
