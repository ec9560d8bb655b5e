use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::DocumentHeader;

/// Culture-specific rendering preferences for document output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayLocale {
    pub decimal_separator: char,
    /// `chrono` strftime pattern used for the `Date:` line.
    pub datetime_format: String,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            datetime_format: "%d.%m.%Y %H:%M:%S".into(),
        }
    }
}

impl DisplayLocale {
    pub fn format_datetime(&self, value: NaiveDateTime) -> String {
        value.format(&self.datetime_format).to_string()
    }
}

/// Renders a decimal with its stored scale, swapping in the locale separator.
pub fn format_amount(locale: &DisplayLocale, amount: Decimal) -> String {
    let mut body = amount.to_string();
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    body
}

/// Shared rendering capability of every document kind.
///
/// Implementors render the common header first and then append their own
/// field, one `Label: value` pair per line.
pub trait Displayable {
    fn header(&self) -> &DocumentHeader;

    fn show(&self, locale: &DisplayLocale) -> String {
        self.header().render(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_keeps_scale_and_uses_separator() {
        let locale = DisplayLocale::default();
        assert_eq!(format_amount(&locale, dec!(100.50)), "100,50");
        assert_eq!(format_amount(&locale, dec!(7)), "7");

        let dotted = DisplayLocale {
            decimal_separator: '.',
            ..DisplayLocale::default()
        };
        assert_eq!(format_amount(&dotted, dec!(-200.75)), "-200.75");
    }

    #[test]
    fn datetime_follows_pattern() {
        let value = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 0))
            .unwrap();
        assert_eq!(
            DisplayLocale::default().format_datetime(value),
            "09.03.2024 07:05:00"
        );
    }
}
