//! Rounding strategies.
//!
//! CRITICAL: all arithmetic is decimal, never floating-point.

use coinage_shared::types::{Currency, Money, RoundingMode};
use rust_decimal::Decimal;
use serde::Serialize;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// A rounding strategy. Pure value object: equal parameters, equal behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rounding {
    /// Round to `scale` decimal places. Negative scales round to tens,
    /// hundreds, and so on.
    Scale {
        /// Target number of decimal places.
        scale: i64,
        /// Rounding mode.
        mode: RoundingMode,
    },
    /// Round to the currency's natural fraction digits.
    Currency {
        /// Currency whose fraction digits apply.
        currency: Currency,
        /// Rounding mode.
        mode: RoundingMode,
    },
    /// Round to the nearest multiple of `minor_units` of the currency's
    /// smallest unit (CHF 5 -> 0.05).
    Cash {
        /// Currency whose smallest unit applies.
        currency: Currency,
        /// Rounding mode.
        mode: RoundingMode,
        /// Smallest circulating amount, in minor units.
        minor_units: u32,
    },
}

impl Rounding {
    /// Decimal rounding at `scale`.
    #[must_use]
    pub const fn scale(scale: i64, mode: RoundingMode) -> Self {
        Self::Scale { scale, mode }
    }

    /// Rounding to `currency`'s fraction digits.
    #[must_use]
    pub const fn currency(currency: Currency, mode: RoundingMode) -> Self {
        Self::Currency { currency, mode }
    }

    /// Cash rounding with HALF_UP.
    #[must_use]
    pub const fn cash(currency: Currency, minor_units: u32) -> Self {
        Self::cash_with_mode(currency, RoundingMode::HalfUp, minor_units)
    }

    /// Cash rounding with an explicit mode. `minor_units` of zero is treated as one.
    #[must_use]
    pub const fn cash_with_mode(currency: Currency, mode: RoundingMode, minor_units: u32) -> Self {
        let minor_units = if minor_units == 0 { 1 } else { minor_units };
        Self::Cash {
            currency,
            mode,
            minor_units,
        }
    }

    /// Rounding mode in use.
    #[must_use]
    pub const fn mode(&self) -> RoundingMode {
        match self {
            Self::Scale { mode, .. } | Self::Currency { mode, .. } | Self::Cash { mode, .. } => {
                *mode
            }
        }
    }

    /// Rounds a bare decimal value.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        match *self {
            Self::Scale { scale, mode } => round_scale(value, scale, mode),
            Self::Currency { currency, mode } => {
                value.round_dp_with_strategy(currency.fraction_digits(), mode.strategy())
            }
            Self::Cash {
                currency,
                mode,
                minor_units,
            } => {
                let digits = currency.fraction_digits();
                let increment = Decimal::new(i64::from(minor_units), digits);
                round_to_increment(value, increment, mode).round_dp(digits)
            }
        }
    }

    /// Rounds a monetary amount, keeping its currency.
    #[must_use]
    pub fn apply(&self, money: &Money) -> Money {
        Money::new(self.round(money.amount), money.currency)
    }
}

fn round_scale(value: Decimal, scale: i64, mode: RoundingMode) -> Decimal {
    let clamped = u32::try_from(scale.unsigned_abs())
        .unwrap_or(MAX_SCALE)
        .min(MAX_SCALE);
    if scale >= 0 {
        value.round_dp_with_strategy(clamped, mode.strategy())
    } else {
        let increment = Decimal::from_i128_with_scale(10_i128.pow(clamped), 0);
        round_to_increment(value, increment, mode)
    }
}

/// Rounds `value` to a multiple of `increment`.
///
/// If the multiple chosen by `mode` does not fit in a `Decimal`, the nearest
/// multiple toward zero is used instead. A value too large to divide by the
/// increment is returned as is.
fn round_to_increment(value: Decimal, increment: Decimal, mode: RoundingMode) -> Decimal {
    let Some(units) = value.checked_div(increment) else {
        return value;
    };
    units
        .round_dp_with_strategy(0, mode.strategy())
        .checked_mul(increment)
        .or_else(|| units.trunc().checked_mul(increment))
        .unwrap_or(value)
}
