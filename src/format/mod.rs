//! Display formatting for projection results
//!
//! Currency rendering goes through the [`MoneyFormat`] strategy so report
//! and chart code can be handed a different locale convention (or a
//! deterministic stub in tests). The free functions use the Indian Rupee
//! convention of the reference calculator.

mod currency;
mod email;

pub use currency::{CurrencyFormatter, DigitGrouping, MoneyFormat};
pub use email::validate_email_address;

/// Render with the default (Indian Rupee) formatter: `₹3,10,585`
pub fn format_currency(value: f64) -> String {
    CurrencyFormatter::indian_rupee().format(value)
}

/// Scale into Cr / L / K bands with the default formatter: `₹1.25 Cr`
pub fn format_magnitude(value: f64) -> String {
    CurrencyFormatter::indian_rupee().format_magnitude(value)
}

/// One decimal place with a percent sign: `12.0%`
///
/// Exact binary ties round half-to-even (std float formatting).
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.0), "12.0%");
        assert_eq!(format_percent(7.55), "7.5%"); // 7.55 is stored just below the tie
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-3.14), "-3.1%");
        assert_eq!(format_percent(211.0), "211.0%");
    }

    #[test]
    fn test_default_helpers_use_rupee() {
        assert_eq!(format_currency(310_585.0), "₹3,10,585");
        assert_eq!(format_magnitude(12_500_000.0), "₹1.25 Cr");
    }
}
