//! Amount format resolution.

pub mod amount_format;
pub mod context;
pub mod query;
pub mod resolver;
pub mod symbols;


pub use amount_format::{AmountFormat, GROUPING_KEY};
pub use context::{FormatContext, FormatDefaults};
pub use query::{FormatQuery, FormatQueryBuilder};
pub use resolver::{DEFAULT_STYLE, FormatResolver, PROVIDER_NAME};
pub use symbols::LocaleSymbols;
