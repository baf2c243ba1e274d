pub mod exchangerate_host;
pub mod open_er_api;

use anyhow::{Result, anyhow};
use std::collections::HashMap;

use crate::currency::CurrencyCode;

/// Looks up `to` in a `rates` table and rejects unusable values.
pub(crate) fn rate_from_table(
    rates: &HashMap<String, f64>,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<f64> {
    let rate = rates
        .get(to.as_str())
        .copied()
        .ok_or_else(|| anyhow!("No rate for {} in response for base {}", to, from))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(anyhow!("Unusable rate {} for pair {} -> {}", rate, from, to));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (CurrencyCode, CurrencyCode) {
        (
            CurrencyCode::parse("USD").unwrap(),
            CurrencyCode::parse("PHP").unwrap(),
        )
    }

    #[test]
    fn test_rate_lookup() {
        let (from, to) = pair();
        let rates = HashMap::from([("PHP".to_string(), 56.0)]);
        assert_eq!(rate_from_table(&rates, &from, &to).unwrap(), 56.0);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let (from, to) = pair();
        let rates = HashMap::from([("EUR".to_string(), 0.91)]);
        let err = rate_from_table(&rates, &from, &to).unwrap_err();
        assert_eq!(err.to_string(), "No rate for PHP in response for base USD");
    }

    #[test]
    fn test_non_positive_rate_is_an_error() {
        let (from, to) = pair();
        for bad in [0.0, -1.2, f64::NAN] {
            let rates = HashMap::from([("PHP".to_string(), bad)]);
            assert!(rate_from_table(&rates, &from, &to).is_err());
        }
    }
}
