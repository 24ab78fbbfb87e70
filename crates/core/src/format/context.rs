//! Resolved, immutable format configuration.

use std::sync::Arc;

use coinage_shared::types::{AmountFactory, Attributes, Locale};
use coinage_shared::{MoneyError, MoneyResult};

use super::query::FormatQuery;

/// Provider-side defaults a query is resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatDefaults {
    /// Locale used when the query has none.
    pub locale: Option<Locale>,
    /// Attributes the query may override.
    pub attributes: Attributes,
}

/// Fully resolved format configuration wrapped by an [`AmountFormat`].
///
/// [`AmountFormat`]: super::AmountFormat
#[derive(Debug, Clone)]
pub struct FormatContext {
    style_id: String,
    locale: Option<Locale>,
    amount_factory: Arc<dyn AmountFactory>,
    attributes: Attributes,
}

impl FormatContext {
    /// Resolves `query` over `defaults`.
    ///
    /// Precedence is query first, then defaults: the query's locale and
    /// attributes win over the provider's.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the query carries no amount factory.
    pub fn resolve(
        style_id: &str,
        defaults: &FormatDefaults,
        query: &FormatQuery,
    ) -> MoneyResult<Self> {
        let amount_factory = query
            .amount_factory()
            .cloned()
            .ok_or_else(|| MoneyError::invalid("amount factory required"))?;

        Ok(Self {
            style_id: style_id.to_string(),
            locale: query.locale().or(defaults.locale.as_ref()).cloned(),
            amount_factory,
            attributes: Attributes::merged(&defaults.attributes, query.attributes()),
        })
    }

    /// Resolved style id.
    #[must_use]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Resolved locale. `None` means root conventions.
    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Capability used to build parsed amounts.
    #[must_use]
    pub fn amount_factory(&self) -> &Arc<dyn AmountFactory> {
        &self.amount_factory
    }

    /// Merged attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
