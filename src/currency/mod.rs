use serde::{Deserialize, Serialize};

/// Number formatting preferences for displayed amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
        }
    }
}

/// Formats `value` rounded to a whole number with thousands grouping.
pub fn format_whole_amount(locale: &LocaleConfig, value: f64) -> String {
    let rounded = value.round();
    let mut body = format!("{:.0}", rounded.abs());
    body = group_digits(&body, locale.grouping_separator);
    if rounded < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Builds the `currency/PERIOD` unit label shown under an amount. Only the
/// period is uppercased.
pub fn unit_label(currency: &str, period: &str) -> String {
    format!("{}/{}", currency.trim(), period.trim().to_uppercase())
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let locale = LocaleConfig::default();
        assert_eq!(format_whole_amount(&locale, 45000.0), "45,000");
        assert_eq!(format_whole_amount(&locale, 87650.0), "87,650");
        assert_eq!(format_whole_amount(&locale, 1234567.0), "1,234,567");
        assert_eq!(format_whole_amount(&locale, 999.0), "999");
    }

    #[test]
    fn rounds_fractional_amounts() {
        let locale = LocaleConfig::default();
        assert_eq!(format_whole_amount(&locale, 123456.78), "123,457");
        assert_eq!(format_whole_amount(&locale, 0.4), "0");
    }

    #[test]
    fn honours_locale_separator() {
        let locale = LocaleConfig {
            grouping_separator: '.',
        };
        assert_eq!(format_whole_amount(&locale, 87650.0), "87.650");
    }

    #[test]
    fn unit_label_uppercases_period() {
        assert_eq!(unit_label("USD", "year"), "USD/YEAR");
        assert_eq!(unit_label("eur", " annual "), "eur/ANNUAL");
    }
}
