//! Upstream exchange-rate source abstraction.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::currency::CurrencyCode;

/// Per-request timeout applied by every source.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the multiplier from `from` to `to`. Errors are internal
    /// to the resolver and drive its fallback decision.
    async fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64>;
}
