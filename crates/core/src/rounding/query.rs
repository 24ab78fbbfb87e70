//! Rounding queries.

use chrono::{DateTime, Utc};
use coinage_shared::MoneyResult;
use coinage_shared::types::{AttributeValue, Attributes, Currency, ROUNDING_MODE_KEY, RoundingMode};
use tracing::debug;

/// Attribute key for the target scale.
pub const SCALE_KEY: &str = "scale";

/// Attribute key for the cash rounding flag.
pub const CASH_ROUNDING_KEY: &str = "cashRounding";

/// A request for a rounding strategy. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundingQuery {
    currency: Option<Currency>,
    rounding_name: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    attributes: Attributes,
}

impl RoundingQuery {
    /// Starts building a query.
    #[must_use]
    pub fn builder() -> RoundingQueryBuilder {
        RoundingQueryBuilder::default()
    }

    /// Query for the default rounding of `currency`.
    #[must_use]
    pub fn for_currency(currency: Currency) -> Self {
        Self::builder().currency(currency).build()
    }

    /// Query for plain decimal rounding at `scale`.
    #[must_use]
    pub fn for_scale(scale: i64) -> Self {
        Self::builder().scale(scale).build()
    }

    /// Target currency, if any.
    #[must_use]
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Requested rounding id, if any.
    #[must_use]
    pub fn rounding_name(&self) -> Option<&str> {
        self.rounding_name.as_deref()
    }

    /// Point in time the rounding should be valid for. `None` means now.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Extra attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Rounding mode, or `default` if the query has none.
    ///
    /// A value of the wrong type also yields `default`.
    #[must_use]
    pub fn rounding_mode(&self, default: RoundingMode) -> RoundingMode {
        or_default(self.attributes.get_rounding_mode(default), default)
    }

    /// Scale, or `default` if the query has none (or a non-integer one).
    #[must_use]
    pub fn scale(&self, default: i64) -> i64 {
        or_default(self.attributes.get_int(SCALE_KEY, default), default)
    }

    /// Whether cash rounding was requested. Defaults to `false`.
    #[must_use]
    pub fn cash_rounding(&self) -> bool {
        or_default(self.attributes.get_bool(CASH_ROUNDING_KEY, false), false)
    }
}

fn or_default<T>(lookup: MoneyResult<T>, default: T) -> T {
    lookup.unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring mistyped rounding attribute");
        default
    })
}

/// Builder for [`RoundingQuery`].
#[derive(Debug, Default)]
pub struct RoundingQueryBuilder {
    query: RoundingQuery,
}

impl RoundingQueryBuilder {
    /// Sets the target currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.query.currency = Some(currency);
        self
    }

    /// Requests a named rounding.
    #[must_use]
    pub fn rounding_name(mut self, name: impl Into<String>) -> Self {
        self.query.rounding_name = Some(name.into());
        self
    }

    /// Requests the rounding valid at a historical point in time.
    #[must_use]
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.query.timestamp = Some(at);
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn rounding_mode(self, mode: RoundingMode) -> Self {
        self.attribute(ROUNDING_MODE_KEY, mode)
    }

    /// Sets the scale.
    #[must_use]
    pub fn scale(self, scale: i64) -> Self {
        self.attribute(SCALE_KEY, scale)
    }

    /// Requests cash rounding.
    #[must_use]
    pub fn cash_rounding(self, cash: bool) -> Self {
        self.attribute(CASH_ROUNDING_KEY, cash)
    }

    /// Sets an arbitrary attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.query.attributes.set(key, value);
        self
    }

    /// Finishes the query.
    #[must_use]
    pub fn build(self) -> RoundingQuery {
        self.query
    }
}
