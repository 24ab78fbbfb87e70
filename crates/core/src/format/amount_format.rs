//! The default amount format: `CODE amount` with locale separators.

use std::str::FromStr;

use coinage_shared::types::{Currency, Money};
use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};

use super::context::FormatContext;
use super::symbols::LocaleSymbols;

/// Attribute turning digit grouping on or off (default on).
pub const GROUPING_KEY: &str = "grouping";

/// Renders and parses amounts according to one resolved [`FormatContext`].
#[derive(Debug, Clone)]
pub struct AmountFormat {
    context: FormatContext,
}

impl AmountFormat {
    /// Wraps a resolved context.
    #[must_use]
    pub fn new(context: FormatContext) -> Self {
        Self { context }
    }

    /// The context this format was built from.
    #[must_use]
    pub fn context(&self) -> &FormatContext {
        &self.context
    }

    fn symbols(&self) -> LocaleSymbols {
        LocaleSymbols::for_locale(self.context.locale())
    }

    fn grouping(&self) -> MoneyResult<bool> {
        self.context.attributes().get_bool(GROUPING_KEY, true)
    }

    /// Renders `money` at its currency's fraction digits (banker's rounding).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the context's grouping attribute is not a bool.
    pub fn format(&self, money: &Money) -> MoneyResult<String> {
        let symbols = self.symbols();
        let digits = money.currency.fraction_digits();
        let rounded = money
            .amount
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);

        let plain = format!(
            "{:.prec$}",
            rounded.abs(),
            prec = usize::try_from(digits).unwrap_or_default()
        );
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut out = String::with_capacity(plain.len() + 8);
        out.push_str(money.currency.code());
        out.push(' ');
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        if self.grouping()? {
            push_grouped(&mut out, int_part, symbols.grouping);
        } else {
            out.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            out.push(symbols.decimal);
            out.push_str(frac);
        }
        Ok(out)
    }

    /// Parses text produced by [`AmountFormat::format`].
    ///
    /// The value is built through the context's amount factory.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed text (including a grouping separator in the
    /// fraction) and `UnknownCurrency` for unknown codes.
    pub fn parse(&self, text: &str) -> MoneyResult<Money> {
        let symbols = self.symbols();
        let (code, number) = text
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| MoneyError::Parse(format!("expected 'CODE amount': {text:?}")))?;
        let currency = Currency::from_str(code)?;

        let number = number.trim();
        let (int_part, frac_part) = match number.split_once(symbols.decimal) {
            Some((i, f)) => (i, Some(f)),
            None => (number, None),
        };
        if frac_part.is_some_and(|f| f.contains(symbols.grouping)) {
            return Err(MoneyError::Parse(format!(
                "grouping separator after decimal separator: {number:?}"
            )));
        }

        let mut normalized: String = int_part.chars().filter(|c| *c != symbols.grouping).collect();
        if let Some(frac) = frac_part {
            normalized.push('.');
            normalized.push_str(frac);
        }
        let amount = Decimal::from_str(&normalized)
            .map_err(|e| MoneyError::Parse(format!("{number:?}: {e}")))?;

        Ok(self.context.amount_factory().create(amount, currency))
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatDefaults, FormatQuery};
    use coinage_shared::types::{AmountFactory, Locale, MoneyFactory};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn format_for(tag: Option<&str>) -> AmountFormat {
        let mut builder = FormatQuery::builder().amount_factory(MoneyFactory);
        if let Some(tag) = tag {
            builder = builder.locale(tag.parse::<Locale>().unwrap());
        }
        let ctx = FormatContext::resolve("default", &FormatDefaults::default(), &builder.build())
            .unwrap();
        AmountFormat::new(ctx)
    }

    #[rstest]
    #[case(None, Money::new(dec!(1234567.891), Currency::Usd), "USD 1,234,567.89")]
    #[case(Some("en-US"), Money::new(dec!(-1234.5), Currency::Usd), "USD -1,234.50")]
    #[case(Some("de-DE"), Money::new(dec!(1234.5), Currency::Eur), "EUR 1.234,50")]
    #[case(Some("de-CH"), Money::new(dec!(98765.4), Currency::Chf), "CHF 98'765.40")]
    #[case(Some("fr-FR"), Money::new(dec!(1000), Currency::Eur), "EUR 1\u{202F}000,00")]
    #[case(Some("ja-JP"), Money::new(dec!(1500.5), Currency::Jpy), "JPY 1,500")]
    #[case(Some("en"), Money::new(dec!(1.2345), Currency::Kwd), "KWD 1.234")]
    #[case(Some("en"), Money::new(dec!(999), Currency::Usd), "USD 999.00")]
    #[case(Some("en"), Money::new(dec!(-0.001), Currency::Usd), "USD 0.00")]
    fn test_format(#[case] tag: Option<&str>, #[case] money: Money, #[case] expected: &str) {
        assert_eq!(format_for(tag).format(&money).unwrap(), expected);
    }

    #[test]
    fn test_grouping_can_be_disabled() {
        let query = FormatQuery::builder()
            .amount_factory(MoneyFactory)
            .attribute(GROUPING_KEY, false)
            .build();
        let ctx = FormatContext::resolve("default", &FormatDefaults::default(), &query).unwrap();
        let fmt = AmountFormat::new(ctx);

        let text = fmt.format(&Money::new(dec!(1234567), Currency::Usd)).unwrap();

        assert_eq!(text, "USD 1234567.00");
    }

    #[test]
    fn test_parse_reverses_format() {
        let fmt = format_for(Some("de-DE"));
        let money = fmt.parse("EUR -1.234,50").unwrap();
        assert_eq!(money, Money::new(dec!(-1234.50), Currency::Eur));
    }

    #[test]
    fn test_parse_errors() {
        let fmt = format_for(None);
        assert_eq!(fmt.parse("1,234.00").unwrap_err().error_code(), "PARSE_ERROR");
        assert_eq!(fmt.parse("USD abc").unwrap_err().error_code(), "PARSE_ERROR");
        assert_eq!(
            fmt.parse("XXX 1.00").unwrap_err(),
            MoneyError::UnknownCurrency("XXX".into())
        );
    }

    #[rstest]
    #[case(None, "USD 1.234,50")]
    #[case(Some("en-US"), "USD 1,234.5,0")]
    #[case(Some("de-DE"), "EUR 1,234.50")]
    #[case(Some("de-CH"), "CHF 1.234'50")]
    fn test_parse_rejects_grouping_in_fraction(#[case] tag: Option<&str>, #[case] text: &str) {
        let err = format_for(tag).parse(text).unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_parse_accepts_grouped_integer_part() {
        let fmt = format_for(Some("de-CH"));
        let money = fmt.parse("CHF 98'765.40").unwrap();
        assert_eq!(money, Money::new(dec!(98765.40), Currency::Chf));
    }

    #[derive(Debug)]
    struct Truncating;

    impl AmountFactory for Truncating {
        fn name(&self) -> &str {
            "truncating"
        }

        fn create(&self, amount: Decimal, currency: Currency) -> Money {
            Money::new(amount.trunc(), currency)
        }
    }

    #[test]
    fn test_parse_uses_context_factory() {
        let query = FormatQuery::builder().amount_factory(Truncating).build();
        let ctx = FormatContext::resolve("default", &FormatDefaults::default(), &query).unwrap();
        let fmt = AmountFormat::new(ctx);

        let money = fmt.parse("USD 12.99").unwrap();

        assert_eq!(money, Money::new(dec!(12), Currency::Usd));
        assert_eq!(fmt.context().amount_factory().name(), "truncating");
    }
}
