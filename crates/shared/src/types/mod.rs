//! Common value types used by every provider.

pub mod attributes;
pub mod locale;
pub mod money;
pub mod rounding_mode;

pub use attributes::{AttributeValue, Attributes, ROUNDING_MODE_KEY};
pub use locale::Locale;
pub use money::{AmountFactory, Currency, Money, MoneyFactory};
pub use rounding_mode::RoundingMode;
