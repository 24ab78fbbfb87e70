//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency types with decimal precision
//! - Locales and the typed attribute bag carried by queries
//! - Error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::CoinageConfig;
pub use error::{MoneyError, MoneyResult};
