//! Fractional share investment returns

use super::types::{checked_div, checked_mul};
use super::{EngineError, EngineResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Terms of the share investment product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareProduct {
    /// Fixed return paid per month on the invested amount (0.005 = 0.5%)
    pub monthly_return_rate: Decimal,
}

impl ShareProduct {
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_return_rate < Decimal::ZERO {
            return Err(EngineError::invalid(
                "monthly_return_rate",
                format!("must be non-negative, got {}", self.monthly_return_rate),
            ));
        }
        Ok(())
    }
}

impl Default for ShareProduct {
    fn default() -> Self {
        Self {
            monthly_return_rate: dec!(0.005),
        }
    }
}

/// Returns on a share of the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInvestment {
    /// Share of the total project, in percent
    pub share_percentage: Decimal,
    pub monthly_returns: Decimal,
    /// Monthly returns over the whole holding period
    pub total_returns: Decimal,
    /// Simple (non-compounded) annual rate, in percent
    pub effective_annual_return: Decimal,
}

/// Share investment calculator
#[derive(Debug, Clone, Default)]
pub struct ShareCalculator {
    pub product: ShareProduct,
}

impl ShareCalculator {
    pub fn new(product: ShareProduct) -> Self {
        Self { product }
    }

    /// Simple annual return in percent; independent of amount and term
    pub fn effective_annual_return(&self) -> EngineResult<Decimal> {
        checked_mul(
            self.product.monthly_return_rate,
            dec!(1200),
            "monthly_return_rate",
        )
    }

    pub fn compute_share_investment(
        &self,
        total_investment: Decimal,
        share_amount: Decimal,
        holding_period_months: u32,
    ) -> EngineResult<ShareInvestment> {
        if total_investment <= Decimal::ZERO {
            return Err(EngineError::invalid(
                "total_investment",
                format!("must be positive, got {}", total_investment),
            ));
        }
        if share_amount < Decimal::ZERO || share_amount > total_investment {
            return Err(EngineError::invalid(
                "share_amount",
                format!(
                    "must be within [0, {}], got {}",
                    total_investment, share_amount
                ),
            ));
        }
        if holding_period_months == 0 {
            return Err(EngineError::invalid(
                "holding_period_months",
                "must be at least 1",
            ));
        }

        let share_percentage = checked_mul(
            checked_div(share_amount, total_investment, "total_investment")?,
            dec!(100),
            "total_investment",
        )?;
        let monthly_returns =
            checked_mul(share_amount, self.product.monthly_return_rate, "share_amount")?;
        let total_returns = checked_mul(
            monthly_returns,
            Decimal::from(holding_period_months),
            "share_amount",
        )?;

        tracing::debug!(
            %share_amount,
            %share_percentage,
            %total_returns,
            "Computed share investment"
        );

        Ok(ShareInvestment {
            share_percentage,
            monthly_returns,
            total_returns,
            effective_annual_return: self.effective_annual_return()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_share() {
        let calc = ShareCalculator::default();
        let share = calc
            .compute_share_investment(dec!(1570000), dec!(1570000), 12)
            .unwrap();

        assert_eq!(share.share_percentage, dec!(100));
        assert_eq!(share.monthly_returns, dec!(7850));
        assert_eq!(share.total_returns, dec!(94200));
    }

    #[test]
    fn test_partial_share() {
        let calc = ShareCalculator::default();
        let share = calc
            .compute_share_investment(dec!(1000000), dec!(250000), 24)
            .unwrap();

        assert_eq!(share.share_percentage, dec!(25));
        assert_eq!(share.monthly_returns, dec!(1250));
        assert_eq!(share.total_returns, dec!(30000));
    }

    #[test]
    fn test_effective_annual_return_is_constant() {
        let calc = ShareCalculator::default();
        let cases = [
            (dec!(1000000), dec!(0), 1),
            (dec!(1000000), dec!(100000), 12),
            (dec!(57800000), dec!(57800000), 60),
            (dec!(250000), dec!(123456.78), 37),
        ];

        for (total, amount, months) in cases {
            let share = calc.compute_share_investment(total, amount, months).unwrap();
            assert_eq!(share.effective_annual_return, dec!(6));
        }
    }

    #[test]
    fn test_share_amount_bounds() {
        let calc = ShareCalculator::default();

        assert!(calc.compute_share_investment(dec!(1000), dec!(0), 12).is_ok());
        assert!(calc.compute_share_investment(dec!(1000), dec!(1000), 12).is_ok());

        for amount in [dec!(-1), dec!(1000.01)] {
            let err = calc
                .compute_share_investment(dec!(1000), amount, 12)
                .unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidArgument {
                    field: "share_amount",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_non_positive_total_rejected() {
        let calc = ShareCalculator::default();
        for total in [dec!(0), dec!(-5)] {
            let err = calc.compute_share_investment(total, dec!(0), 12).unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidArgument {
                    field: "total_investment",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_huge_rate_fails_instead_of_panicking() {
        let calc = ShareCalculator::new(ShareProduct {
            monthly_return_rate: Decimal::MAX,
        });
        let err = calc
            .compute_share_investment(dec!(1000), dec!(1000), 12)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument {
                field: "share_amount",
                ..
            }
        ));
        assert!(calc.effective_annual_return().is_err());
    }

    #[test]
    fn test_total_returns_overflow_reported() {
        let calc = ShareCalculator::new(ShareProduct {
            monthly_return_rate: Decimal::MAX / dec!(4),
        });
        // One month fits, sixty do not
        let err = calc
            .compute_share_investment(dec!(1), dec!(1), 60)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { .. }));
    }

    #[test]
    fn test_zero_months_rejected() {
        let calc = ShareCalculator::default();
        assert!(calc
            .compute_share_investment(dec!(1000), dec!(500), 0)
            .is_err());
    }
}
