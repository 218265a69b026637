//! Price formatting

/// Price with exactly two decimals followed by the currency mark
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(1.5, "€"), "1.50 €");
/// ```
pub fn format_price(value: f64, currency: &str) -> String {
    format!("{:.2} {}", value, currency)
}
