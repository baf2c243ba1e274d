//! Rate resolution with a primary source and a single fallback step.

use tracing::{debug, instrument};

use crate::currency::CurrencyCode;
use crate::error::ConvertError;
use crate::rate_source::RateSource;

/// Resolves a currency pair to a rate, consulting the fallback source
/// only after the primary has failed. Sources are never raced; the two
/// requests are strictly sequential.
pub struct RateResolver<P, F> {
    primary: P,
    fallback: F,
}

impl<P: RateSource, F: RateSource> RateResolver<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        RateResolver { primary, fallback }
    }

    /// Resolves the multiplier from `from` to `to`.
    ///
    /// Identical codes yield 1.0 without touching the network. Any
    /// primary failure (transport, non-2xx, malformed body, missing or
    /// unusable rate) advances to the fallback exactly once; a failed
    /// fallback is terminal. No retries, no backoff.
    #[instrument(name = "ResolveRate", skip(self), fields(from = %from, to = %to))]
    pub async fn resolve(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConvertError> {
        if from == to {
            return Ok(1.0);
        }

        match self.primary.rate(from, to).await {
            Ok(rate) => Ok(rate),
            Err(err) => {
                debug!("Primary source failed: {err:#}. Trying fallback");
                self.fallback.rate(from, to).await.map_err(|err| {
                    debug!("Fallback source failed: {err:#}");
                    ConvertError::RateUnavailable {
                        from: from.clone(),
                        to: to.clone(),
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        rate: Option<f64>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn new(rate: Option<f64>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                StubSource {
                    rate,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl RateSource for StubSource {
        async fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> anyhow::Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.rate
                .ok_or_else(|| anyhow!("stub failure for {} -> {}", from, to))
        }
    }

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_identity_pair_skips_both_sources() {
        let (primary, primary_calls) = StubSource::new(Some(56.0));
        let (fallback, fallback_calls) = StubSource::new(Some(57.0));
        let resolver = RateResolver::new(primary, fallback);

        let rate = resolver.resolve(&code("USD"), &code("USD")).await.unwrap();
        assert_eq!(rate, 1.0);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_rate_wins_without_fallback() {
        let (primary, _) = StubSource::new(Some(56.0));
        let (fallback, fallback_calls) = StubSource::new(Some(57.0));
        let resolver = RateResolver::new(primary, fallback);

        let rate = resolver.resolve(&code("USD"), &code("PHP")).await.unwrap();
        assert_eq!(rate, 56.0);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fallback_rate_after_primary_failure() {
        let (primary, primary_calls) = StubSource::new(None);
        let (fallback, fallback_calls) = StubSource::new(Some(57.0));
        let resolver = RateResolver::new(primary, fallback);

        let rate = resolver.resolve(&code("USD"), &code("PHP")).await.unwrap();
        assert_eq!(rate, 57.0);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_sources_failing_is_terminal() {
        let (primary, primary_calls) = StubSource::new(None);
        let (fallback, fallback_calls) = StubSource::new(None);
        let resolver = RateResolver::new(primary, fallback);

        let err = resolver
            .resolve(&code("USD"), &code("PHP"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::RateUnavailable { .. }));
        assert_eq!(
            err.to_string(),
            "No exchange rate available for USD -> PHP"
        );

        // Exactly one attempt per source, no retry loop.
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }
}
