//! The error module defines the ways a money operation can be refused.

use thiserror::Error;

/// Every way a `Money` operation can fail. Operands are never modified when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two amounts with different currency codes were added or subtracted.
    #[error("cannot combine amounts in different currencies ({left} and {right})")]
    CurrencyMismatch {
        left: String,
        right: String,
    },
    /// A multiplier or divisor was below zero.
    #[error("operand cannot be negative")]
    NegativeOperand,
    /// A divisor was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in a `Decimal`.
    #[error("arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
