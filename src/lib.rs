//! Currency-aware money values.
//!
//! A [Currency] describes a unit of money (name, ISO 4217 code, optional
//! symbol, display digits) and [Money] pairs a decimal amount with one. Money
//! arithmetic refuses to mix currencies or scale by negative factors, and
//! always returns new values:
//!
//! ```
//! use money_core::{amount, Currency, Money, error::Error};
//!
//! let usd = Currency::new("US Dollar", "USD", Some("$"), 2);
//! let eur = Currency::new("Euro", "EUR", None, 2);
//! assert_eq!(usd.to_string(), "USD ($)");
//!
//! let price = Money::new(amount!(9.5), usd.clone());
//! assert_eq!(price.to_string(), "$9.50");
//! assert_eq!((&price * 2).unwrap().to_string(), "$19.00");
//! assert_eq!(price.div(0), Err(Error::DivisionByZero));
//! assert!(price.add(&Money::new(5, eur)).is_err());
//! ```
//!
//! [Currency]: models/currency/struct.Currency.html
//! [Money]: models/money/struct.Money.html

pub mod error;
#[macro_use]
mod util;
pub mod models;

pub use models::{
    currency::{Currency, CurrencyBuilder},
    money::Money,
};
pub use rust_decimal::Decimal;
