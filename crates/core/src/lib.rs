//! Default format and rounding providers for Coinage.
//!
//! This crate contains pure resolution logic with ZERO I/O dependencies.
//! Each provider answers queries presented to it, either with a strategy or
//! with "no opinion" so an aggregator can consult the next provider.
//!
//! # Modules
//!
//! - `format` - Amount format queries, contexts, and the default format provider
//! - `rounding` - Rounding queries, strategies, and the default rounding provider
//! - `provider` - Provider traits implemented by both resolvers

pub mod format;
pub mod provider;
pub mod rounding;

pub use format::{AmountFormat, FormatContext, FormatQuery, FormatResolver};
pub use provider::{FormatProvider, RoundingProvider};
pub use rounding::{Rounding, RoundingQuery, RoundingResolver};
