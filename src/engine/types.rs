//! Valuation engine types

use rust_decimal::Decimal;
use thiserror::Error;

/// Valuation engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A precondition on an input or policy value was violated
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

fn overflow(field: &'static str, op: &str) -> EngineError {
    EngineError::invalid(field, format!("arithmetic overflow in {}", op))
}

/// `a + b`, failing on overflow
pub(crate) fn checked_add(a: Decimal, b: Decimal, field: &'static str) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(field, "add"))
}

/// `a - b`, failing on overflow
pub(crate) fn checked_sub(a: Decimal, b: Decimal, field: &'static str) -> EngineResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(field, "sub"))
}

/// `a * b`, failing on overflow
pub(crate) fn checked_mul(a: Decimal, b: Decimal, field: &'static str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(field, "mul"))
}

/// `a / b`, failing on overflow or a zero divisor
pub(crate) fn checked_div(a: Decimal, b: Decimal, field: &'static str) -> EngineResult<Decimal> {
    a.checked_div(b).ok_or_else(|| overflow(field, "div"))
}
