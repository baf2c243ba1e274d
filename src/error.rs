//! Error taxonomy surfaced to callers of the conversion core.

use crate::currency::CurrencyCode;
use thiserror::Error;

/// Failures a caller can act on.
///
/// Transport and parse faults from the upstream sources never appear
/// here as their own kind; they collapse into `RateUnavailable` once
/// both sources are exhausted.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The caller-supplied amount is not a finite, non-negative number.
    #[error("Invalid amount: {0:?}. Expected a non-negative number")]
    InvalidAmount(String),

    /// Neither the primary nor the fallback source produced a usable rate.
    #[error("No exchange rate available for {from} -> {to}")]
    RateUnavailable { from: CurrencyCode, to: CurrencyCode },
}
