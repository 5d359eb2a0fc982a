//! Indicator configuration

use anyhow::Result;
use deterrent_common::{
    DeterrentError, IndicatorError, DEFAULT_TARGET_RATIO, DEFAULT_UNIT_PRICE, MAX_RATIO,
    MIN_RATIO,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the unit price
pub const UNIT_PRICE_ENV: &str = "DETERRENT_UNIT_PRICE";

/// Environment variable overriding the target ratio
pub const TARGET_RATIO_ENV: &str = "DETERRENT_TARGET_RATIO";

/// Pricing and threshold settings for the deterrent effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Monetary value per positively detected entity
    pub unit_price: f64,
    /// Top fraction of the population used by the deterrent effect
    pub target_ratio: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_UNIT_PRICE,
            target_ratio: DEFAULT_TARGET_RATIO,
        }
    }
}

impl IndicatorConfig {
    pub fn new(unit_price: f64, target_ratio: f64) -> Self {
        Self {
            unit_price,
            target_ratio,
        }
    }

    /// Load configuration from defaults and environment.
    ///
    /// Overrides that leave the configuration invalid fail with
    /// `DeterrentError::Config`.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();
        cfg.apply_overrides(|key| std::env::var(key).ok());
        cfg.validate()
            .map_err(|e| DeterrentError::Config(format!("Invalid environment overrides: {}", e)))?;
        Ok(cfg)
    }

    /// Apply `DETERRENT_*` overrides from a variable lookup.
    ///
    /// Values that do not parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(UNIT_PRICE_ENV) {
            match val.trim().parse::<f64>() {
                Ok(v) => self.unit_price = v,
                Err(e) => warn!(key = UNIT_PRICE_ENV, value = %val, "Ignoring override: {}", e),
            }
        }
        if let Some(val) = lookup(TARGET_RATIO_ENV) {
            match val.trim().parse::<f64>() {
                Ok(v) => self.target_ratio = v,
                Err(e) => warn!(key = TARGET_RATIO_ENV, value = %val, "Ignoring override: {}", e),
            }
        }
    }

    /// Check that the unit price is positive and the target ratio lies in [0, 1]
    pub fn validate(&self) -> deterrent_common::Result<()> {
        if !(self.unit_price.is_finite() && self.unit_price > 0.0) {
            return Err(IndicatorError::InvalidArgument(format!(
                "unit_price must be a positive finite number, got {}",
                self.unit_price
            ))
            .into());
        }
        if !(MIN_RATIO..=MAX_RATIO).contains(&self.target_ratio) {
            return Err(IndicatorError::ratio_out_of_range("target_ratio", self.target_ratio).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = IndicatorConfig::default();
        assert_eq!(cfg.unit_price, 10_000.0);
        assert_eq!(cfg.target_ratio, 0.12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_overrides_applied() {
        let mut cfg = IndicatorConfig::default();
        cfg.apply_overrides(lookup(&[(UNIT_PRICE_ENV, "20000"), (TARGET_RATIO_ENV, " 0.2 ")]));
        assert_eq!(cfg, IndicatorConfig::new(20_000.0, 0.2));
    }

    #[test]
    fn test_unparsable_override_ignored() {
        let mut cfg = IndicatorConfig::default();
        cfg.apply_overrides(lookup(&[(UNIT_PRICE_ENV, "ten thousand")]));
        assert_eq!(cfg, IndicatorConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(IndicatorConfig::new(0.0, 0.1).validate().unwrap_err().is_invalid_argument());
        assert!(IndicatorConfig::new(f64::INFINITY, 0.1).validate().is_err());
        assert!(IndicatorConfig::new(100.0, 1.5).validate().unwrap_err().is_invalid_argument());
        assert!(IndicatorConfig::new(100.0, f64::NAN).validate().is_err());
        assert!(IndicatorConfig::new(100.0, 0.0).validate().is_ok());
        assert!(IndicatorConfig::new(100.0, 1.0).validate().is_ok());
    }

    // Sole test that mutates DETERRENT_* in the process environment
    #[test]
    fn test_load_from_environment() {
        std::env::set_var(UNIT_PRICE_ENV, "25000");
        std::env::set_var(TARGET_RATIO_ENV, "0.3");
        let cfg = IndicatorConfig::load().unwrap();
        assert_eq!(cfg, IndicatorConfig::new(25_000.0, 0.3));

        std::env::set_var(TARGET_RATIO_ENV, "1.5");
        let err = IndicatorConfig::load().unwrap_err();
        let err = err.downcast_ref::<DeterrentError>().unwrap();
        assert!(err.is_config());
        assert!(err.to_string().contains("target_ratio must be within [0, 1]"));

        std::env::remove_var(UNIT_PRICE_ENV);
        std::env::remove_var(TARGET_RATIO_ENV);
        assert_eq!(IndicatorConfig::load().unwrap(), IndicatorConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: IndicatorConfig = serde_json::from_str(r#"{"unit_price": 500.0}"#).unwrap();
        assert_eq!(cfg.unit_price, 500.0);
        assert_eq!(cfg.target_ratio, DEFAULT_TARGET_RATIO);
    }
}
