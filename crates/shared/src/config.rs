//! Provider configuration management.

use serde::Deserialize;

use crate::error::MoneyResult;
use crate::types::{Locale, RoundingMode};

/// Provider configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinageConfig {
    /// Format provider configuration.
    #[serde(default)]
    pub format: FormatConfig,
    /// Rounding provider configuration.
    #[serde(default)]
    pub rounding: RoundingConfig,
}

/// Format provider configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatConfig {
    /// Locale used when a query does not name one (e.g. "de-CH").
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Restricts the advertised locales. Unset means every supported locale.
    #[serde(default)]
    pub locales: Option<Vec<String>>,
}

impl FormatConfig {
    /// Parses the configured default locale, if any.
    pub fn default_locale(&self) -> MoneyResult<Option<Locale>> {
        self.default_locale.as_deref().map(str::parse::<Locale>).transpose()
    }

    /// Parses the configured locale restriction, if any.
    pub fn locales(&self) -> MoneyResult<Option<Vec<Locale>>> {
        self.locales
            .as_ref()
            .map(|tags| tags.iter().map(|t| t.parse()).collect::<MoneyResult<Vec<Locale>>>())
            .transpose()
    }
}

/// Rounding provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundingConfig {
    /// Scale used when a query does not carry one.
    #[serde(default = "default_scale")]
    pub default_scale: i64,
    /// Rounding mode used when a query does not carry one.
    #[serde(default)]
    pub default_mode: RoundingMode,
}

fn default_scale() -> i64 {
    2
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            default_scale: default_scale(),
            default_mode: RoundingMode::default(),
        }
    }
}

impl CoinageConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
