//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt::Debug;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency.
    pub currency: Currency,
}

/// ISO 4217 currency codes known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Swiss Franc
    Chf,
    /// Japanese Yen
    Jpy,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
    /// Kuwaiti Dinar
    Kwd,
}

impl Currency {
    /// Every currency in the registry.
    pub const ALL: [Self; 8] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Chf,
        Self::Jpy,
        Self::Idr,
        Self::Sgd,
        Self::Kwd,
    ];

    /// Returns the ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Jpy => "JPY",
            Self::Idr => "IDR",
            Self::Sgd => "SGD",
            Self::Kwd => "KWD",
        }
    }

    /// Number of decimal places conventionally used by this currency.
    #[must_use]
    pub const fn fraction_digits(self) -> u32 {
        match self {
            Self::Jpy | Self::Idr => 0,
            Self::Kwd => 3,
            Self::Usd | Self::Eur | Self::Gbp | Self::Chf | Self::Sgd => 2,
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

/// Capability for constructing monetary values.
///
/// Format contexts embed one so that parsing produces amounts of the
/// caller's choosing.
pub trait AmountFactory: Debug + Send + Sync {
    /// Short identifier of this factory.
    fn name(&self) -> &str;

    /// Builds a monetary value.
    fn create(&self, amount: Decimal, currency: Currency) -> Money;
}

/// Factory producing plain [`Money`] values, amount kept as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyFactory;

impl AmountFactory for MoneyFactory {
    fn name(&self) -> &str {
        "money"
    }

    fn create(&self, amount: Decimal, currency: Currency) -> Money {
        Money::new(amount, currency)
    }
}
