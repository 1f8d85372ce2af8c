//! Storefront configuration.
//!
//! Replaces the ambient `backendUrl` / `currency` / delivery-fee globals with
//! one struct that is passed explicitly into every view.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file, and `STOREFRONT_*` environment variables.
//!
//! ```yaml
//! backend_url: https://api.example.com
//! currency: "€"
//! delivery_fee: 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_BACKEND_URL: &str = "STOREFRONT_BACKEND_URL";
pub const ENV_CURRENCY: &str = "STOREFRONT_CURRENCY";
pub const ENV_DELIVERY_FEE: &str = "STOREFRONT_DELIVERY_FEE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the backend, without a trailing slash.
    pub backend_url: String,

    /// Symbol printed in front of every amount.
    pub currency: String,

    /// Flat shipping fee added to a non-empty cart.
    pub delivery_fee: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:4000".to_string(),
            currency: "$".to_string(),
            delivery_fee: 10.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `STOREFRONT_*` overrides looked up through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.backend_url = url;
        }
        if let Some(currency) = lookup(ENV_CURRENCY) {
            self.currency = currency;
        }
        if let Some(fee) = lookup(ENV_DELIVERY_FEE) {
            self.delivery_fee = fee.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_DELIVERY_FEE,
                value: fee.clone(),
            })?;
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.backend_url = self.backend_url.trim_end_matches('/').to_string();
        if self.backend_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "backend_url",
                value: String::new(),
            });
        }
        if !self.delivery_fee.is_finite() || self.delivery_fee < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "delivery_fee",
                value: self.delivery_fee.to_string(),
            });
        }
        Ok(self)
    }

    /// Formats an amount with the configured currency symbol.
    pub fn price(&self, amount: f64) -> String {
        format!("{}{}", self.currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_yaml_fills_missing_fields_with_defaults() {
        let config = StorefrontConfig::from_yaml_str("backend_url: https://api.example.com/\n").unwrap();
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.currency, "$");
        assert_eq!(config.delivery_fee, 10.0);
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency: \"€\"\ndelivery_fee: 4.5").unwrap();

        let config = StorefrontConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.currency, "€");
        assert_eq!(config.delivery_fee, 4.5);
    }

    #[test]
    fn test_overrides_take_priority() {
        let env: HashMap<&str, &str> = [
            (ENV_BACKEND_URL, "http://backend:9000"),
            (ENV_DELIVERY_FEE, "0"),
        ]
        .into_iter()
        .collect();

        let config = StorefrontConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.delivery_fee, 0.0);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_invalid_fee_is_rejected() {
        let result = StorefrontConfig::default()
            .with_overrides(|key| (key == ENV_DELIVERY_FEE).then(|| "ten".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_DELIVERY_FEE, .. })
        ));

        assert!(StorefrontConfig::from_yaml_str("delivery_fee: -1").is_err());
    }

    #[test]
    fn test_price_formatting() {
        let config = StorefrontConfig::default();
        assert_eq!(config.price(25.5), "$25.5");
        assert_eq!(config.price(30.0), "$30");
    }
}
