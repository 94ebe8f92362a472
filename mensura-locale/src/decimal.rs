//! Locale-aware decimal rendering via ICU4X

use std::str::FromStr;

use icu_decimal::input::Decimal;
use icu_decimal::options::DecimalFormatterOptions;
use icu_decimal::DecimalFormatter;
use tracing::debug;

use mensura_core::{Locale, NumberRenderer};

/// Fraction digits kept by decimal-style output.
const MAX_FRACTION_DIGITS: usize = 3;

/// Decimal-style number renderer: locale-correct grouping and decimal
/// separators, rounding at three fraction digits, trailing zeros
/// trimmed.
pub struct DecimalRenderer {
    formatter: Option<DecimalFormatter>,
}

impl DecimalRenderer {
    pub fn new(locale: &Locale) -> Self {
        let formatter = locale
            .to_string()
            .parse::<icu_locale::Locale>()
            .ok()
            .and_then(|loc| {
                DecimalFormatter::try_new(loc.into(), DecimalFormatterOptions::default()).ok()
            });
        if formatter.is_none() {
            debug!(%locale, "no decimal data for locale; using plain decimal output");
        }
        DecimalRenderer { formatter }
    }

    fn decimal(value: f64) -> Option<Decimal> {
        let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value);
        let mut dec = Decimal::from_str(&rounded).ok()?;
        dec.trim_end();
        Some(dec)
    }
}

impl NumberRenderer for DecimalRenderer {
    fn render(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return None;
        }
        let dec = Self::decimal(value)?;
        Some(match &self.formatter {
            Some(formatter) => formatter.format_to_string(&dec),
            None => dec.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(locale: &str) -> DecimalRenderer {
        DecimalRenderer::new(&Locale::parse(locale).unwrap())
    }

    #[test]
    fn test_english_grouping() {
        assert_eq!(renderer("en-US").render(1234.5678), Some("1,234.568".to_string()));
    }

    #[test]
    fn test_german_separators() {
        assert_eq!(renderer("de").render(1234.5), Some("1.234,5".to_string()));
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(renderer("en-US").render(5.0), Some("5".to_string()));
        assert_eq!(renderer("en-US").render(5.20), Some("5.2".to_string()));
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(renderer("en-US").render(-3.25), Some("-3.25".to_string()));
    }

    #[test]
    fn test_non_finite_is_unrepresentable() {
        assert_eq!(renderer("en-US").render(f64::NAN), None);
        assert_eq!(renderer("en-US").render(f64::INFINITY), None);
    }
}
