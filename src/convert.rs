//! Conversion service sitting atop the rate resolver.

use chrono::{DateTime, Utc};

use crate::currency::CurrencyCode;
use crate::error::ConvertError;
use crate::rate_source::RateSource;
use crate::resolver::RateResolver;

/// Outcome of a single conversion request. Transient; nothing here
/// outlives the request that produced it.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub converted: f64,
    pub resolved_at: DateTime<Utc>,
}

/// Parses a caller-supplied amount. Unparseable, non-finite, or
/// negative input is rejected before any network activity.
pub fn parse_amount(input: &str) -> Result<f64, ConvertError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(input.to_string()))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(ConvertError::InvalidAmount(input.to_string()));
    }
    Ok(amount)
}

pub struct ConversionService<P, F> {
    resolver: RateResolver<P, F>,
}

impl<P: RateSource, F: RateSource> ConversionService<P, F> {
    pub fn new(resolver: RateResolver<P, F>) -> Self {
        ConversionService { resolver }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// The identity pair reuses the resolver's short-circuit, so both
    /// layers agree that no network call happens. `RateUnavailable`
    /// propagates untouched; no default or stale rate is ever
    /// substituted for a failed resolution.
    pub async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<ConversionResult, ConvertError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ConvertError::InvalidAmount(amount.to_string()));
        }

        let rate = self.resolver.resolve(from, to).await?;
        Ok(ConversionResult {
            amount,
            from: from.clone(),
            to: to.clone(),
            rate,
            converted: amount * rate,
            resolved_at: Utc::now(),
        })
    }
}
