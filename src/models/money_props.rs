//! Property-based tests for money arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::currency::Currency;
use super::money::Money;
use crate::error::Error;

/// Amounts from -1,000,000.00 to 1,000,000.00
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Factors from 0.0001 to 10,000.0000
fn positive_factor() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

fn negative_factor() -> impl Strategy<Value = Decimal> {
    positive_factor().prop_map(|n| -n)
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::new("US Dollar", "USD", Some("$"), 2)),
        Just(Currency::new("Euro", "EUR", None, 2)),
        Just(Currency::new("Japanese Yen", "JPY", Some("¥"), 0)),
        Just(Currency::new("Kuwaiti Dinar", "KWD", None, 3)),
    ]
}

/// Two currencies with different codes.
fn currency_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("codes must differ", |(a, b)| a.code() != b.code())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_sums_amounts(a in any_amount(), b in any_amount(), cur in currency()) {
        let sum = Money::new(a, cur.clone()).add(&Money::new(b, cur.clone())).unwrap();
        prop_assert_eq!(sum, Money::new(a + b, cur));
    }

    #[test]
    fn prop_mixed_currencies_rejected(a in any_amount(), b in any_amount(), (c1, c2) in currency_pair()) {
        let left = Money::new(a, c1.clone());
        let right = Money::new(b, c2.clone());
        let expected: Result<Money, Error> = Err(Error::CurrencyMismatch { left: c1.code().clone(), right: c2.code().clone() });
        prop_assert_eq!(left.add(&right), expected.clone());
        prop_assert_eq!(left.sub(&right), expected.clone());
        prop_assert_eq!(&left + &right, expected.clone());
        prop_assert_eq!(&left - &right, expected);
    }

    #[test]
    fn prop_sub_undoes_add(a in any_amount(), b in any_amount(), cur in currency()) {
        let start = Money::new(a, cur.clone());
        let other = Money::new(b, cur);
        let back = start.add(&other).unwrap().sub(&other).unwrap();
        prop_assert_eq!(back, start);
    }

    #[test]
    fn prop_mul_by_zero_is_zero(a in any_amount(), cur in currency()) {
        let zero = Money::new(a, cur.clone()).mul(0).unwrap();
        prop_assert!(zero.is_zero());
        prop_assert_eq!(zero.currency(), &cur);
    }

    #[test]
    fn prop_negative_factors_rejected(a in any_amount(), f in negative_factor(), cur in currency()) {
        let money = Money::new(a, cur);
        prop_assert_eq!(money.mul(f), Err(Error::NegativeOperand));
        prop_assert_eq!(money.div(f), Err(Error::NegativeOperand));
        prop_assert_eq!(&money * f, Err(Error::NegativeOperand));
        prop_assert_eq!(&money / f, Err(Error::NegativeOperand));
    }

    #[test]
    fn prop_div_by_zero_rejected(a in any_amount(), cur in currency()) {
        let money = Money::new(a, cur);
        prop_assert_eq!(money.div(0), Err(Error::DivisionByZero));
        prop_assert_eq!(money.div(Decimal::new(0, 4)), Err(Error::DivisionByZero));
        prop_assert_eq!(&money / 0, Err(Error::DivisionByZero));
    }

    #[test]
    fn prop_div_divides_amount(a in any_amount(), d in positive_factor(), cur in currency()) {
        let quotient = Money::new(a, cur.clone()).div(d).unwrap();
        prop_assert_eq!(quotient.amount(), a / d);
        prop_assert_eq!(quotient.currency(), &cur);
    }

    #[test]
    fn prop_equality_is_structural(a in any_amount(), (c1, c2) in currency_pair()) {
        let x = Money::new(a, c1.clone());
        let y = Money::new(a, c1);
        prop_assert_eq!(&x, &x);
        prop_assert_eq!(&x, &y);
        prop_assert_eq!(&y, &x);
        prop_assert_ne!(x, Money::new(a, c2));
    }

    #[test]
    fn prop_display_has_currency_digits(a in any_amount(), cur in currency()) {
        let shown = Money::new(a, cur.clone()).to_string();
        let fraction = shown.rsplit('.').next().unwrap_or("");
        if cur.digits() == 0 {
            prop_assert!(!shown.contains('.'));
        } else {
            prop_assert_eq!(fraction.len(), cur.digits() as usize);
        }
        match cur.symbol() {
            Some(symbol) => {
                prop_assert!(shown.starts_with(symbol));
            }
            None => {
                let prefix = format!("{} ", cur.code());
                prop_assert!(shown.starts_with(&prefix));
            }
        }
    }
}
