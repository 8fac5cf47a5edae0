//! The currency module holds the Currency model, a descriptor for a unit of
//! money. It carries no exchange rate information.
//!
//! Only the `code` decides whether two amounts can be combined. The name,
//! symbol, and digits are there for equality and display.

use getset::{CopyGetters, Getters};
use std::fmt;

/// Describes a currency: its name, ISO 4217 code, optional symbol, and how
/// many fractional digits amounts in it are shown with.
///
/// Two currencies are equal only if all four fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Currency {
    /// The English name of the currency
    #[getset(get = "pub")]
    name: String,
    /// The ISO 4217 three-letter code. Case-sensitive.
    #[getset(get = "pub")]
    code: String,
    /// Optional symbol used to designate the currency
    #[builder(setter(into, strip_option), default)]
    #[cfg_attr(feature = "with_serde", serde(default, skip_serializing_if = "Option::is_none"))]
    symbol: Option<String>,
    /// Number of fractional digits used when displaying amounts
    #[builder(default = "2")]
    #[getset(get_copy = "pub")]
    digits: u32,
}

impl Currency {
    /// Create a new currency. Nothing about the code or digits is validated.
    pub fn new<N, C>(name: N, code: C, symbol: Option<&str>, digits: u32) -> Self
        where N: Into<String>,
              C: Into<String>,
    {
        Self {
            name: name.into(),
            code: code.into(),
            symbol: symbol.map(|s| s.to_string()),
            digits,
        }
    }

    /// Start building a currency. `symbol` defaults to none and `digits` to 2.
    pub fn builder() -> CurrencyBuilder {
        CurrencyBuilder::default()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Whether amounts in `other` can be added to or subtracted from amounts in
    /// this currency.
    pub fn is_compatible(&self, other: &Currency) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.pad(&format!("{} ({})", self.code, symbol)),
            None => f.pad(&self.code),
        }
    }
}
