//! Money is an amount paired with the currency it is denominated in.
//!
//! All arithmetic returns a new `Money` and leaves the operands alone. Amounts
//! in different currencies are never combined: adding or subtracting them is
//! an [Error::CurrencyMismatch][mismatch]. Scaling is only allowed by
//! non-negative factors.
//!
//! The operators (`+`, `-`, `*`, `/`) are implemented and return the same
//! `Result` as the named methods they forward to.
//!
//! [mismatch]: ../../error/enum.Error.html#variant.CurrencyMismatch

use crate::{
    error::{Error, Result},
    models::currency::Currency,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use std::fmt;
use std::ops;
use tracing::debug;

/// Midpoints are rounded to the nearest even digit when displaying.
const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// An amount of money in a specific currency.
///
/// Two `Money` values are equal if their amounts are numerically equal and
/// their currencies are equal in every field.
#[derive(Clone, PartialEq, Eq, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Money {
    /// The quantity of currency. Any sign or magnitude.
    #[getset(get_copy = "pub")]
    amount: Decimal,
    /// The currency the amount is in
    #[getset(get = "pub")]
    currency: Currency,
}

impl Money {
    /// Create a new money value.
    pub fn new<T: Into<Decimal>>(amount: T, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::zero(), currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::zero()
    }

    /// Add another amount in the same currency. The result keeps *this*
    /// value's currency, including its name, symbol, and digits.
    pub fn add(&self, other: &Money) -> Result<Money> {
        self.check_compatible(other, "add")?;
        let total = self.amount.checked_add(other.amount).ok_or(Error::Overflow)?;
        Ok(self.with_amount(total))
    }

    /// Subtract another amount in the same currency. The result may be
    /// negative and keeps this value's currency.
    pub fn sub(&self, other: &Money) -> Result<Money> {
        self.check_compatible(other, "sub")?;
        let total = self.amount.checked_sub(other.amount).ok_or(Error::Overflow)?;
        Ok(self.with_amount(total))
    }

    /// Scale this amount by a non-negative factor. Zero is allowed.
    pub fn mul<T: Into<Decimal>>(&self, multiplier: T) -> Result<Money> {
        let multiplier = multiplier.into();
        if multiplier < Decimal::zero() {
            debug!(%multiplier, "money: rejected negative multiplier");
            Err(Error::NegativeOperand)?;
        }
        let total = self.amount.checked_mul(multiplier).ok_or(Error::Overflow)?;
        Ok(self.with_amount(total))
    }

    /// Divide this amount by a positive divisor.
    ///
    /// A zero divisor is reported as `DivisionByZero`, never as
    /// `NegativeOperand`.
    pub fn div<T: Into<Decimal>>(&self, divisor: T) -> Result<Money> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            debug!("money: rejected division by zero");
            Err(Error::DivisionByZero)?;
        }
        if divisor < Decimal::zero() {
            debug!(%divisor, "money: rejected negative divisor");
            Err(Error::NegativeOperand)?;
        }
        let total = self.amount.checked_div(divisor).ok_or(Error::Overflow)?;
        Ok(self.with_amount(total))
    }

    /// Return a copy with the amount rounded to the currency's digits, the
    /// same way it is displayed.
    pub fn rounded(&self) -> Money {
        let mut amount = self.amount.round_dp_with_strategy(self.currency.digits(), DISPLAY_ROUNDING);
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        self.with_amount(amount)
    }

    fn with_amount(&self, amount: Decimal) -> Money {
        Self::new(amount, self.currency.clone())
    }

    fn check_compatible(&self, other: &Money, op: &'static str) -> Result<()> {
        if !self.currency.is_compatible(&other.currency) {
            debug!(op, left = %self.currency.code(), right = %other.currency.code(), "money: rejected currency mismatch");
            Err(Error::CurrencyMismatch {
                left: self.currency.code().clone(),
                right: other.currency.code().clone(),
            })?;
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.digits() as usize;
        let amount = self.rounded().amount;
        let shown = match self.currency.symbol() {
            Some(symbol) => format!("{}{:.*}", symbol, digits, amount),
            None => format!("{} {:.*}", self.currency.code(), digits, amount),
        };
        f.pad(&shown)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Money {}>", self)
    }
}

impl ops::Add for Money {
    type Output = Result<Money>;

    fn add(self, other: Money) -> Result<Money> {
        Money::add(&self, &other)
    }
}

impl<'a> ops::Add<&'a Money> for &'a Money {
    type Output = Result<Money>;

    fn add(self, other: &'a Money) -> Result<Money> {
        Money::add(self, other)
    }
}

impl ops::Sub for Money {
    type Output = Result<Money>;

    fn sub(self, other: Money) -> Result<Money> {
        Money::sub(&self, &other)
    }
}

impl<'a> ops::Sub<&'a Money> for &'a Money {
    type Output = Result<Money>;

    fn sub(self, other: &'a Money) -> Result<Money> {
        Money::sub(self, other)
    }
}

impl<T: Into<Decimal>> ops::Mul<T> for Money {
    type Output = Result<Money>;

    fn mul(self, multiplier: T) -> Result<Money> {
        Money::mul(&self, multiplier)
    }
}

impl<'a, T: Into<Decimal>> ops::Mul<T> for &'a Money {
    type Output = Result<Money>;

    fn mul(self, multiplier: T) -> Result<Money> {
        Money::mul(self, multiplier)
    }
}

impl<T: Into<Decimal>> ops::Div<T> for Money {
    type Output = Result<Money>;

    fn div(self, divisor: T) -> Result<Money> {
        Money::div(&self, divisor)
    }
}

impl<'a, T: Into<Decimal>> ops::Div<T> for &'a Money {
    type Output = Result<Money>;

    fn div(self, divisor: T) -> Result<Money> {
        Money::div(self, divisor)
    }
}
