//! Utilities shared by the models.

#[macro_use]
pub mod number;
