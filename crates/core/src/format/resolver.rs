//! The default amount format provider.

use std::collections::BTreeSet;

use coinage_shared::MoneyResult;
use coinage_shared::config::FormatConfig;
use coinage_shared::types::Locale;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::amount_format::AmountFormat;
use super::context::{FormatContext, FormatDefaults};
use super::query::FormatQuery;
use super::symbols::LocaleSymbols;
use crate::provider::FormatProvider;

/// Name under which the default format provider answers.
pub const PROVIDER_NAME: &str = "default";

/// The only style id this provider recognizes.
pub const DEFAULT_STYLE: &str = "default";

static SHARED: Lazy<FormatResolver> = Lazy::new(FormatResolver::new);

/// Resolves format queries for the `"default"` provider.
///
/// Locale and style sets are computed once at construction and never change,
/// so a resolver can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct FormatResolver {
    available_locales: BTreeSet<Locale>,
    available_styles: BTreeSet<String>,
    defaults: FormatDefaults,
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatResolver {
    /// Creates a resolver advertising every locale with known symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(LocaleSymbols::supported_locales(), FormatDefaults::default())
    }

    fn with_defaults(available_locales: BTreeSet<Locale>, defaults: FormatDefaults) -> Self {
        Self {
            available_locales,
            available_styles: BTreeSet::from([DEFAULT_STYLE.to_string()]),
            defaults,
        }
    }

    /// Creates a resolver from configuration.
    ///
    /// Configured locales without known symbols are dropped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a configured locale tag is malformed.
    pub fn from_config(config: &FormatConfig) -> MoneyResult<Self> {
        let supported = LocaleSymbols::supported_locales();
        let available_locales = match config.locales()? {
            None => supported,
            Some(wanted) => wanted
                .into_iter()
                .filter(|locale| {
                    let known = supported.contains(locale);
                    if !known {
                        warn!(locale = %locale, "Configured locale has no known symbols, skipping");
                    }
                    known
                })
                .collect(),
        };
        let defaults = FormatDefaults {
            locale: config.default_locale()?,
            ..FormatDefaults::default()
        };
        Ok(Self::with_defaults(available_locales, defaults))
    }

    /// Process-wide instance with built-in settings.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Formats matching `query`: empty when out of scope, otherwise exactly one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an in-scope query has no amount factory.
    pub fn resolve(&self, query: &FormatQuery) -> MoneyResult<Vec<AmountFormat>> {
        if !query.accepts_provider(PROVIDER_NAME) {
            debug!(
                provider = PROVIDER_NAME,
                requested = ?query.providers(),
                "Format query excludes provider"
            );
            return Ok(Vec::new());
        }
        if let Some(style) = query.style_id().filter(|s| *s != DEFAULT_STYLE) {
            debug!(provider = PROVIDER_NAME, style, "Unsupported format style");
            return Ok(Vec::new());
        }

        let context = FormatContext::resolve(DEFAULT_STYLE, &self.defaults, query)?;
        debug!(
            provider = PROVIDER_NAME,
            locale = ?context.locale().map(ToString::to_string),
            "Resolved amount format"
        );
        Ok(vec![AmountFormat::new(context)])
    }

    /// Locales this provider formats for.
    #[must_use]
    pub fn available_locales(&self) -> &BTreeSet<Locale> {
        &self.available_locales
    }

    /// Always `{"default"}`.
    #[must_use]
    pub fn available_styles(&self) -> &BTreeSet<String> {
        &self.available_styles
    }
}

impl FormatProvider for FormatResolver {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn amount_formats(&self, query: &FormatQuery) -> MoneyResult<Vec<AmountFormat>> {
        self.resolve(query)
    }

    fn available_locales(&self) -> &BTreeSet<Locale> {
        &self.available_locales
    }

    fn available_styles(&self) -> &BTreeSet<String> {
        &self.available_styles
    }
}
