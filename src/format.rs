use crate::funding::MatchingResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Locale and currency used for every formatted amount and date.
///
/// Passed explicitly so formatting never depends on the browser's locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleConfig {
    pub locale: String,
    pub currency: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "de-DE".to_string(),
            currency: "EUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocaleFamily {
    German,
    English,
    Other,
}

fn locale_family(locale: &str) -> LocaleFamily {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "de" => LocaleFamily::German,
        "en" => LocaleFamily::English,
        _ => LocaleFamily::Other,
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn format_money(value: f64, locale: &LocaleConfig, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    // Rounding noise such as -1e-15 must not show up as "-0.00"
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    let symbol = currency_symbol(&locale.currency);

    match locale_family(&locale.locale) {
        LocaleFamily::German => {
            let mut number = group_thousands(int_part, '.');
            if !frac_part.is_empty() {
                number.push(',');
                number.push_str(frac_part);
            }
            format!("{}{} {}", sign, number, symbol.trim_end())
        }
        LocaleFamily::English | LocaleFamily::Other => {
            let mut number = group_thousands(int_part, ',');
            if !frac_part.is_empty() {
                number.push('.');
                number.push_str(frac_part);
            }
            format!("{}{}{}", sign, symbol, number)
        }
    }
}

/// Format a currency amount with two decimals, e.g. `1.234,50 €` for `de-DE`
/// or `€1,234.50` for `en-US`.
pub fn format_currency(value: f64, locale: &LocaleConfig) -> String {
    format_money(value, locale, 2)
}

/// Whole-unit variant for slider labels (`10 €`, `€10`).
pub fn format_currency_whole(value: f64, locale: &LocaleConfig) -> String {
    format_money(value, locale, 0)
}

/// Long calendar date: `1. März 2025` (de), `March 1, 2025` (en), ISO otherwise.
pub fn format_long_date(date: DateTime<Utc>, locale: &str) -> String {
    match locale_family(locale) {
        LocaleFamily::German => date
            .format_localized("%-d. %B %Y", chrono::Locale::de_DE)
            .to_string(),
        LocaleFamily::English => date.format("%B %-d, %Y").to_string(),
        LocaleFamily::Other => date.format("%Y-%m-%d").to_string(),
    }
}

/// The three figures the estimator card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingPresentation {
    pub traditional_match: String,
    pub quadratic_match: String,
    pub per_contributor_impact: String,
}

impl MatchingPresentation {
    pub fn new(result: &MatchingResult, locale: &LocaleConfig) -> Self {
        Self {
            traditional_match: format_currency(result.traditional_match, locale),
            quadratic_match: format_currency(result.quadratic_match, locale),
            per_contributor_impact: format_currency(result.per_contributor_share, locale),
        }
    }
}
