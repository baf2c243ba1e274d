use crate::currency::CurrencyCode;

/// Renders the unit rate line for a currency pair.
pub fn display_rate(from: &CurrencyCode, to: &CurrencyCode, rate: f64) -> String {
    format!("1 {from} = {rate:.4} {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rate() {
        let from = CurrencyCode::parse("USD").unwrap();
        let to = CurrencyCode::parse("PHP").unwrap();
        assert_eq!(display_rate(&from, &to, 56.0), "1 USD = 56.0000 PHP");
        assert_eq!(display_rate(&from, &from, 1.0), "1 USD = 1.0000 USD");
    }
}
