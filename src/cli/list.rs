use super::ui;
use comfy_table::Cell;

/// Renders the supported currency codes as a table, six per row.
pub fn display_currencies(currencies: &[String]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Supported currencies")]);

    for chunk in currencies.chunks(6) {
        table.add_row(vec![Cell::new(chunk.join("  "))]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_present() {
        let currencies: Vec<String> = ["USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        let rendered = display_currencies(&currencies);
        for code in &currencies {
            assert!(rendered.contains(code.as_str()), "{code} missing");
        }
    }
}
