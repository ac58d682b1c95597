use crate::format::LocaleConfig;
use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

const SITE_JSON: &str = include_str!("../config/site.json");

/// Site-wide settings, bundled from `config/site.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub estimator: EstimatorSettings,
}

/// Slider bounds and starting values of the funding estimator
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EstimatorSettings {
    #[serde(default = "default_amount")]
    pub default_amount: f64,
    #[serde(default = "default_contributors")]
    pub default_contributors: u32,
    #[serde(default = "default_amount_min")]
    pub amount_min: f64,
    #[serde(default = "default_amount_max")]
    pub amount_max: f64,
    #[serde(default = "default_contributors_min")]
    pub contributors_min: u32,
    #[serde(default = "default_contributors_max")]
    pub contributors_max: u32,
}

fn default_locale() -> String {
    "de-DE".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_amount() -> f64 {
    10.0
}

fn default_contributors() -> u32 {
    20
}

fn default_amount_min() -> f64 {
    1.0
}

fn default_amount_max() -> f64 {
    100.0
}

fn default_contributors_min() -> u32 {
    1
}

fn default_contributors_max() -> u32 {
    100
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            default_amount: default_amount(),
            default_contributors: default_contributors(),
            amount_min: default_amount_min(),
            amount_max: default_amount_max(),
            contributors_min: default_contributors_min(),
            contributors_max: default_contributors_max(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
            log_level: default_log_level(),
            estimator: EstimatorSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            locale: self.locale.clone(),
            currency: self.currency.clone(),
        }
    }

    /// Unrecognized level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Parse site settings from JSON.
///
/// Missing fields take their defaults; a document that does not parse at all
/// yields [`SiteConfig::default`] with a warning, so the site always renders.
pub fn parse_site_config(json: &str) -> SiteConfig {
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::warn!("Failed to parse site config (using defaults): {}", e);
        SiteConfig::default()
    })
}

pub fn load_site_config() -> SiteConfig {
    parse_site_config(SITE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_reference_ui() {
        let config = load_site_config();
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.estimator.default_amount, 10.0);
        assert_eq!(config.estimator.default_contributors, 20);
        assert_eq!(config.estimator.amount_min, 1.0);
        assert_eq!(config.estimator.contributors_max, 100);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_site_config(r#"{ "locale": "en-US", "estimator": { "amount_max": 500 } }"#);
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.estimator.amount_max, 500.0);
        assert_eq!(config.estimator.default_contributors, 20);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        assert_eq!(parse_site_config("{ not json"), SiteConfig::default());
    }

    #[test]
    fn test_level_filter() {
        let mut config = SiteConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_locale_config() {
        let lc = SiteConfig::default().locale_config();
        assert_eq!(lc, LocaleConfig::default());
    }
}
