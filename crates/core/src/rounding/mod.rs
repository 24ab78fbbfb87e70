//! Rounding resolution.

pub mod query;
pub mod resolver;
pub mod strategy;

#[cfg(test)]
mod props;

pub use query::{CASH_ROUNDING_KEY, RoundingQuery, RoundingQueryBuilder, SCALE_KEY};
pub use resolver::{DEFAULT_ROUNDING_ID, PROVIDER_NAME, RoundingResolver};
pub use strategy::Rounding;
