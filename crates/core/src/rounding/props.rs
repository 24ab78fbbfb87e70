//! Property-based tests for rounding resolution.

use chrono::{TimeZone, Utc};
use coinage_shared::types::{AttributeValue, Currency, ROUNDING_MODE_KEY, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{CASH_ROUNDING_KEY, Rounding, RoundingQuery, RoundingResolver, SCALE_KEY};

fn any_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(vec![
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ])
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Amounts from -1,000,000.0000 to 1,000,000.0000.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Optional query fields, applied on top of whatever else a test sets.
fn any_query() -> impl Strategy<Value = RoundingQuery> {
    (
        prop::option::of(any_currency()),
        prop::option::of(any_mode()),
        prop::option::of(-4i64..10),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(currency, mode, scale, cash)| {
            let mut builder = RoundingQuery::builder();
            if let Some(currency) = currency {
                builder = builder.currency(currency);
            }
            if let Some(mode) = mode {
                builder = builder.rounding_mode(mode);
            }
            if let Some(scale) = scale {
                builder = builder.scale(scale);
            }
            if let Some(cash) = cash {
                builder = builder.cash_rounding(cash);
            }
            builder.build()
        })
}

/// An attribute under a known rounding key but with the wrong tag.
fn mistyped_attribute() -> impl Strategy<Value = (&'static str, AttributeValue)> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(|t| (SCALE_KEY, AttributeValue::Text(t))),
        any::<bool>().prop_map(|b| (SCALE_KEY, AttributeValue::Bool(b))),
        "[A-Z_]{0,9}".prop_map(|t| (ROUNDING_MODE_KEY, AttributeValue::Text(t))),
        any::<i64>().prop_map(|i| (ROUNDING_MODE_KEY, AttributeValue::Int(i))),
        any::<i64>().prop_map(|i| (CASH_ROUNDING_KEY, AttributeValue::Int(i))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Historical queries never get an answer, whatever else they carry.
    #[test]
    fn prop_timestamp_means_no_opinion(
        currency in prop::option::of(any_currency()),
        cash in any::<bool>(),
        secs in 0i64..4_000_000_000,
    ) {
        let at = Utc.timestamp_opt(secs, 0).unwrap();
        let mut builder = RoundingQuery::builder().timestamp(at).cash_rounding(cash);
        if let Some(currency) = currency {
            builder = builder.currency(currency);
        }
        prop_assert_eq!(RoundingResolver::shared().resolve(&builder.build()), None);
    }

    /// Without a currency the answer is scale based with the query's scale and mode.
    #[test]
    fn prop_no_currency_is_scale_based(
        mode in prop::option::of(any_mode()),
        scale in prop::option::of(-6i64..30),
        cash in any::<bool>(),
    ) {
        let mut builder = RoundingQuery::builder().cash_rounding(cash);
        if let Some(mode) = mode {
            builder = builder.rounding_mode(mode);
        }
        if let Some(scale) = scale {
            builder = builder.scale(scale);
        }

        let rounding = RoundingResolver::shared().resolve(&builder.build());

        prop_assert_eq!(
            rounding,
            Some(Rounding::scale(scale.unwrap_or(2), mode.unwrap_or(RoundingMode::HalfEven)))
        );
    }

    /// Any rounding name other than "default" gets no answer, whatever the
    /// other fields hold, including attributes of the wrong type.
    #[test]
    fn prop_foreign_name_means_no_opinion(
        name in "[a-z-]{1,20}",
        query in any_query(),
        mistyped in prop::option::of(mistyped_attribute()),
    ) {
        prop_assume!(name != "default");
        let mut builder = RoundingQuery::builder().rounding_name(name);
        if let Some(currency) = query.currency() {
            builder = builder.currency(currency);
        }
        for key in query.attributes().keys() {
            if let Some(value) = query.attributes().get(key) {
                builder = builder.attribute(key, value.clone());
            }
        }
        if let Some((key, value)) = mistyped {
            builder = builder.attribute(key, value);
        }
        prop_assert_eq!(RoundingResolver::shared().resolve(&builder.build()), None);
    }

    /// Mistyped attributes never turn an in-scope query into "no opinion".
    #[test]
    fn prop_mistyped_attribute_still_answered(
        query in any_query(),
        (key, value) in mistyped_attribute(),
    ) {
        let mut builder = RoundingQuery::builder().attribute(key, value);
        if let Some(currency) = query.currency() {
            builder = builder.currency(currency);
        }
        prop_assert!(RoundingResolver::shared().resolve(&builder.build()).is_some());
    }

    /// Equal queries resolve to equal strategies that round identically.
    #[test]
    fn prop_resolution_is_idempotent(query in any_query(), amount in any_amount()) {
        let first = RoundingResolver::new().resolve(&query);
        let second = RoundingResolver::shared().resolve(&query.clone());

        prop_assert_eq!(first, second);
        let first = first.unwrap();
        prop_assert_eq!(first.round(amount), second.unwrap().round(amount));
    }

    /// Currency rounding never leaves more digits than the currency uses.
    #[test]
    fn prop_currency_rounding_respects_fraction_digits(
        currency in any_currency(),
        mode in any_mode(),
        cash in any::<bool>(),
        amount in any_amount(),
    ) {
        let query = RoundingQuery::builder()
            .currency(currency)
            .rounding_mode(mode)
            .cash_rounding(cash)
            .build();
        let rounding = RoundingResolver::shared().resolve(&query).unwrap();

        let rounded = rounding.round(amount);

        prop_assert_eq!(rounded, rounded.round_dp(currency.fraction_digits()));
    }

    /// CHF cash rounding lands on a multiple of 0.05 no further than 0.025 away.
    #[test]
    fn prop_chf_cash_multiple_of_five(amount in any_amount()) {
        let query = RoundingQuery::builder()
            .currency(Currency::Chf)
            .cash_rounding(true)
            .build();
        let rounding = RoundingResolver::shared().resolve(&query).unwrap();

        let rounded = rounding.round(amount);
        let increment = Decimal::new(5, 2);

        prop_assert_eq!((rounded / increment).fract(), Decimal::ZERO);
        prop_assert!((rounded - amount).abs() <= Decimal::new(25, 3));
    }
}
