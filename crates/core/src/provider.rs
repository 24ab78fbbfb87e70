//! Provider seams consumed by a multi-provider aggregator.
//!
//! An empty / `None` answer means "no opinion". `Err` from a format provider
//! means the request itself was invalid and should not be retried against
//! other providers.

use std::collections::BTreeSet;

use coinage_shared::MoneyResult;
use coinage_shared::types::Locale;

use crate::format::{AmountFormat, FormatQuery};
use crate::rounding::{Rounding, RoundingQuery};

/// A named source of amount formats.
pub trait FormatProvider: Send + Sync {
    /// Name under which this provider is registered.
    fn provider_name(&self) -> &str;

    /// Formats matching the query, possibly none.
    fn amount_formats(&self, query: &FormatQuery) -> MoneyResult<Vec<AmountFormat>>;

    /// Locales this provider can format for.
    fn available_locales(&self) -> &BTreeSet<Locale>;

    /// Style ids this provider recognizes.
    fn available_styles(&self) -> &BTreeSet<String>;
}

/// A named source of rounding strategies.
pub trait RoundingProvider: Send + Sync {
    /// Name under which this provider is registered.
    fn provider_name(&self) -> &str;

    /// The rounding matching the query, or `None` for no opinion.
    fn rounding(&self, query: &RoundingQuery) -> Option<Rounding>;

    /// Rounding ids this provider recognizes.
    fn rounding_ids(&self) -> &BTreeSet<String>;
}
