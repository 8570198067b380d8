//! Configuration management for the marina boat registry
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (MARINA__* prefix, highest precedence)
//! 2. marina.local.toml (gitignored, local overrides)
//! 3. marina.toml (project config in the working directory)
//! 4. ~/.config/marina/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! ```toml
//! [registry]
//! capacity = 120
//! reject_non_positive_payments = false
//!
//! [rates]
//! slip = 12.50
//! land = 14.00
//! trailer = 25.00
//! storage = 11.20
//!
//! [display]
//! no_color = false
//! ```

use anyhow::Result;
use marina_types::{LocationKind, MAX_BOATS, Rates};
use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main marina configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarinaConfig {
    pub registry: RegistryConfig,
    pub rates: Rates,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of boats held at once.
    pub capacity: usize,
    /// Refuse payments of zero or less instead of only warning about them.
    pub reject_non_positive_payments: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_BOATS,
            reject_non_positive_payments: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub no_color: bool,
}

impl MarinaConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "registry.capacity must be at least 1".to_string(),
            ));
        }

        for kind in LocationKind::ALL {
            let rate = self.rates.rate(kind);
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "rates.{kind} must be a non-negative amount, got {rate}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MarinaConfig::default();
        assert_eq!(config.registry.capacity, 120);
        assert!(!config.registry.reject_non_positive_payments);
        assert_eq!(config.rates, Rates::default());
        assert!(!config.display.no_color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_invalid() {
        let mut config = MarinaConfig::default();
        config.registry.capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("capacity")
        ));
    }

    #[test]
    fn test_negative_rate_is_invalid() {
        let mut config = MarinaConfig::default();
        config.rates.trailer = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("rates.trailer")
        ));
    }
}
