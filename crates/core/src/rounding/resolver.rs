//! The default rounding provider.

use std::collections::BTreeSet;

use coinage_shared::config::RoundingConfig;
use coinage_shared::types::{Currency, RoundingMode};
use once_cell::sync::Lazy;
use tracing::debug;

use super::query::RoundingQuery;
use super::strategy::Rounding;
use crate::provider::RoundingProvider;

/// Name under which the default rounding provider answers.
pub const PROVIDER_NAME: &str = "default";

/// The only rounding id this provider recognizes.
pub const DEFAULT_ROUNDING_ID: &str = "default";

/// Swiss cash amounts are multiples of 5 centimes.
const CHF_CASH_MINOR_UNITS: u32 = 5;

static SHARED: Lazy<RoundingResolver> = Lazy::new(RoundingResolver::new);

/// Resolves rounding queries for the `"default"` provider.
///
/// Only present-time roundings are served; historical queries get no opinion.
#[derive(Debug, Clone)]
pub struct RoundingResolver {
    rounding_ids: BTreeSet<String>,
    default_scale: i64,
    default_mode: RoundingMode,
}

impl Default for RoundingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingResolver {
    /// Creates a resolver with scale 2 and HALF_EVEN defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&RoundingConfig::default())
    }

    /// Creates a resolver whose query defaults come from configuration.
    #[must_use]
    pub fn from_config(config: &RoundingConfig) -> Self {
        Self {
            rounding_ids: BTreeSet::from([DEFAULT_ROUNDING_ID.to_string()]),
            default_scale: config.default_scale,
            default_mode: config.default_mode,
        }
    }

    /// Process-wide instance with built-in settings.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// The rounding matching `query`, or `None` for no opinion.
    ///
    /// Never fails: out-of-scope queries get `None` and mistyped attributes
    /// fall back to their defaults.
    #[must_use]
    pub fn resolve(&self, query: &RoundingQuery) -> Option<Rounding> {
        if let Some(at) = query.timestamp() {
            debug!(provider = PROVIDER_NAME, %at, "Historical rounding not supported");
            return None;
        }
        if let Some(name) = query.rounding_name().filter(|n| *n != DEFAULT_ROUNDING_ID) {
            debug!(provider = PROVIDER_NAME, rounding = name, "Unknown rounding id");
            return None;
        }

        let mode = query.rounding_mode(self.default_mode);
        let rounding = match query.currency() {
            Some(currency) if query.cash_rounding() => cash_rounding(currency),
            Some(currency) => Rounding::currency(currency, mode),
            None => Rounding::scale(query.scale(self.default_scale), mode),
        };
        debug!(provider = PROVIDER_NAME, ?rounding, "Resolved rounding");
        Some(rounding)
    }

    /// Always `{"default"}`.
    #[must_use]
    pub fn rounding_ids(&self) -> &BTreeSet<String> {
        &self.rounding_ids
    }
}

fn cash_rounding(currency: Currency) -> Rounding {
    match currency {
        Currency::Chf => {
            Rounding::cash_with_mode(currency, RoundingMode::HalfUp, CHF_CASH_MINOR_UNITS)
        }
        _ => Rounding::cash(currency, 1),
    }
}

impl RoundingProvider for RoundingResolver {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn rounding(&self, query: &RoundingQuery) -> Option<Rounding> {
        self.resolve(query)
    }

    fn rounding_ids(&self) -> &BTreeSet<String> {
        &self.rounding_ids
    }
}
