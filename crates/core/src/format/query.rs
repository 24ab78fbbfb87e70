//! Amount format queries.

use std::collections::BTreeSet;
use std::sync::Arc;

use coinage_shared::types::{AmountFactory, AttributeValue, Attributes, Locale, MoneyFactory};

/// A request for amount formats. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct FormatQuery {
    providers: BTreeSet<String>,
    style_id: Option<String>,
    locale: Option<Locale>,
    amount_factory: Option<Arc<dyn AmountFactory>>,
    attributes: Attributes,
}

impl FormatQuery {
    /// Starts building a query.
    #[must_use]
    pub fn builder() -> FormatQueryBuilder {
        FormatQueryBuilder::default()
    }

    /// Query for the given locale using the plain [`MoneyFactory`].
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        Self::builder()
            .locale(locale)
            .amount_factory(MoneyFactory)
            .build()
    }

    /// Accepted provider names. Empty means any provider.
    #[must_use]
    pub fn providers(&self) -> &BTreeSet<String> {
        &self.providers
    }

    /// Requested style id, if any.
    #[must_use]
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    /// Requested locale, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Capability used to build parsed amounts.
    #[must_use]
    pub fn amount_factory(&self) -> Option<&Arc<dyn AmountFactory>> {
        self.amount_factory.as_ref()
    }

    /// Extra attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns true if `name` is accepted by this query.
    #[must_use]
    pub fn accepts_provider(&self, name: &str) -> bool {
        self.providers.is_empty() || self.providers.contains(name)
    }
}

/// Builder for [`FormatQuery`].
#[derive(Debug, Default)]
pub struct FormatQueryBuilder {
    query: FormatQuery,
}

impl FormatQueryBuilder {
    /// Restricts the query to the named provider (repeatable).
    #[must_use]
    pub fn provider(mut self, name: impl Into<String>) -> Self {
        self.query.providers.insert(name.into());
        self
    }

    /// Requests a named style.
    #[must_use]
    pub fn style_id(mut self, style_id: impl Into<String>) -> Self {
        self.query.style_id = Some(style_id.into());
        self
    }

    /// Requests a locale.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.query.locale = Some(locale);
        self
    }

    /// Sets the amount construction capability.
    #[must_use]
    pub fn amount_factory(mut self, factory: impl AmountFactory + 'static) -> Self {
        self.query.amount_factory = Some(Arc::new(factory));
        self
    }

    /// Sets an already shared amount construction capability.
    #[must_use]
    pub fn shared_amount_factory(mut self, factory: Arc<dyn AmountFactory>) -> Self {
        self.query.amount_factory = Some(factory);
        self
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.query.attributes.set(key, value);
        self
    }

    /// Finishes the query.
    #[must_use]
    pub fn build(self) -> FormatQuery {
        self.query
    }
}
