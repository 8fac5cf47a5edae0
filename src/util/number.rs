//! Helpers for writing monetary amounts.

/// Create an amount.
///
/// A thin wrapper around `rust_decimal_macros::dec!` so amounts can be written
/// as literals (`amount!(9.50)`) without going through floats. Callers need
/// `rust_decimal` in their own dependencies, since the expansion names it.
#[macro_export]
macro_rules! amount {
    ($($val:tt)*) => {
        rust_decimal_macros::dec!($($val)*)
    }
}
