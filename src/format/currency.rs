//! Currency formatting strategy

/// Thousands-separator convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Last three digits, then pairs: 1,00,00,000
    Indian,
    /// Groups of three: 10,000,000
    Western,
}

/// Locale convention used to render money amounts
pub trait MoneyFormat {
    /// Currency symbol placed before the amount
    fn symbol(&self) -> &str;

    /// Render a value as whole currency units
    fn format(&self, value: f64) -> String;

    /// Human-readable scale label used on chart axes
    ///
    /// Bands are checked from the top and are inclusive at the lower bound:
    /// crore (1e7, two decimals), lakh (1e5, two decimals), thousand (1e3,
    /// no decimals), then the raw value.
    fn format_magnitude(&self, value: f64) -> String {
        let symbol = self.symbol();
        if value >= 10_000_000.0 {
            format!("{}{:.2} Cr", symbol, value / 10_000_000.0)
        } else if value >= 100_000.0 {
            format!("{}{:.2} L", symbol, value / 100_000.0)
        } else if value >= 1_000.0 {
            format!("{}{:.0}K", symbol, value / 1_000.0)
        } else {
            format!("{}{}", symbol, value)
        }
    }
}

/// Symbol-prefixed, digit-grouped, zero-decimal currency rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    grouping: DigitGrouping,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// ₹ with lakh/crore grouping
    pub fn indian_rupee() -> Self {
        Self::new("₹", DigitGrouping::Indian)
    }

    pub fn grouping(&self) -> DigitGrouping {
        self.grouping
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::indian_rupee()
    }
}

impl MoneyFormat for CurrencyFormatter {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Rounds half away from zero; a value that rounds to zero loses its sign
    fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}∞", sign, self.symbol);
        }

        let rounded = value.abs().round();
        let digits = format!("{:.0}", rounded);
        let grouped = group_digits(&digits, self.grouping);

        if value < 0.0 && rounded > 0.0 {
            format!("-{}{}", self.symbol, grouped)
        } else {
            format!("{}{}", self.symbol, grouped)
        }
    }
}

/// Insert separators into a plain run of ASCII digits
fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group_size = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group_size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainDollars;

    impl MoneyFormat for PlainDollars {
        fn symbol(&self) -> &str {
            "$"
        }

        fn format(&self, value: f64) -> String {
            format!("${:.0}", value)
        }
    }

    #[test]
    fn test_indian_grouping() {
        let inr = CurrencyFormatter::indian_rupee();
        assert_eq!(inr.format(0.0), "₹0");
        assert_eq!(inr.format(999.0), "₹999");
        assert_eq!(inr.format(1_000.0), "₹1,000");
        assert_eq!(inr.format(100_000.0), "₹1,00,000");
        assert_eq!(inr.format(310_585.0), "₹3,10,585");
        assert_eq!(inr.format(12_345_678.0), "₹1,23,45,678");
        assert_eq!(inr.format(4_979_292_951_819.0), "₹49,79,29,29,51,819");
    }

    #[test]
    fn test_western_grouping() {
        let usd = CurrencyFormatter::new("$", DigitGrouping::Western);
        assert_eq!(usd.format(10_000_000.0), "$10,000,000");
        assert_eq!(usd.format(1_234.0), "$1,234");
        assert_eq!(usd.format(123.0), "$123");
    }

    #[test]
    fn test_rounding_and_sign() {
        let inr = CurrencyFormatter::indian_rupee();
        assert_eq!(inr.format(1_234.5), "₹1,235");
        assert_eq!(inr.format(1_234.49), "₹1,234");
        assert_eq!(inr.format(-210_585.0), "-₹2,10,585");
        assert_eq!(inr.format(-1_234.5), "-₹1,235");
        assert_eq!(inr.format(-0.3), "₹0");
    }

    #[test]
    fn test_non_finite() {
        let inr = CurrencyFormatter::indian_rupee();
        assert_eq!(inr.format(f64::NAN), "₹NaN");
        assert_eq!(inr.format(f64::INFINITY), "₹∞");
        assert_eq!(inr.format(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn test_magnitude_bands() {
        let inr = CurrencyFormatter::indian_rupee();
        assert_eq!(inr.format_magnitude(12_500_000.0), "₹1.25 Cr");
        assert_eq!(inr.format_magnitude(250_000.0), "₹2.50 L");
        assert_eq!(inr.format_magnitude(5_000.0), "₹5K");
        assert_eq!(inr.format_magnitude(500.0), "₹500");
    }

    #[test]
    fn test_magnitude_band_edges() {
        let inr = CurrencyFormatter::indian_rupee();
        assert_eq!(inr.format_magnitude(10_000_000.0), "₹1.00 Cr");
        assert_eq!(inr.format_magnitude(9_999_999.0), "₹100.00 L");
        assert_eq!(inr.format_magnitude(100_000.0), "₹1.00 L");
        assert_eq!(inr.format_magnitude(99_999.0), "₹100K");
        assert_eq!(inr.format_magnitude(1_000.0), "₹1K");
        assert_eq!(inr.format_magnitude(999.0), "₹999");
        assert_eq!(inr.format_magnitude(0.0), "₹0");
        assert_eq!(inr.format_magnitude(-5_000.0), "₹-5000");
    }

    #[test]
    fn test_magnitude_uses_injected_symbol() {
        assert_eq!(PlainDollars.format_magnitude(250_000.0), "$2.50 L");
        assert_eq!(PlainDollars.format(42.0), "$42");
    }
}
