//! Currency code type and the default supported set.

use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;

/// Currency codes offered by the front end when the config does not
/// provide its own list.
pub const DEFAULT_CURRENCIES: [&str; 24] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR", "PHP", "SGD", "HKD", "NZD",
    "KRW", "MXN", "BRL", "ZAR", "RUB", "TRY", "AED", "THB", "MYR", "IDR", "VND",
];

/// A three-letter ISO 4217 currency code, stored uppercase.
///
/// The core accepts any well-formed code; membership in the supported
/// set is checked at the CLI boundary against the configured list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(input: &str) -> Result<Self> {
        let code = input.trim();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            bail!("Invalid currency code: {input:?}. Expected a 3-letter code like USD");
        }
        Ok(CurrencyCode(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
