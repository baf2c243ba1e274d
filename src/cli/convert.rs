use super::ui;
use crate::convert::ConversionResult;

/// Renders a conversion result as a headline plus rate and timestamp
/// footers. The raw numerics live in the result; formatting happens
/// only here.
pub fn display_result(result: &ConversionResult) -> String {
    let headline = format!(
        "{:.2} {} = {} {}",
        result.amount,
        result.from,
        ui::style_text(&format!("{:.2}", result.converted), ui::StyleType::TotalValue),
        result.to
    );
    let rate_line = ui::style_text(
        &format!("1 {} = {:.4} {}", result.from, result.rate, result.to),
        ui::StyleType::Subtle,
    );
    let updated_line = ui::style_text(
        &format!(
            "Last updated: {}",
            result.resolved_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        ui::StyleType::Subtle,
    );

    format!("{headline}\n{rate_line}\n{updated_line}")
}
