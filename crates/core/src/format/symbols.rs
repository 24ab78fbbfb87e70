//! Locale-aware decimal symbols.
//!
//! This table is the set of locales the default provider can format for.

use std::collections::BTreeSet;

use coinage_shared::types::Locale;

/// Separators used when rendering decimal amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSymbols {
    /// Separator between integer and fraction.
    pub decimal: char,
    /// Separator between groups of three integer digits.
    pub grouping: char,
}

impl LocaleSymbols {
    /// Root conventions, used when no locale applies.
    pub const ROOT: Self = Self {
        decimal: '.',
        grouping: ',',
    };

    const COMMA_DOT: Self = Self {
        decimal: ',',
        grouping: '.',
    };

    const COMMA_NBSP: Self = Self {
        decimal: ',',
        grouping: '\u{202F}',
    };

    /// Symbols for `locale`: exact match, then its language, then root.
    #[must_use]
    pub fn for_locale(locale: Option<&Locale>) -> Self {
        let Some(locale) = locale else {
            return Self::ROOT;
        };
        lookup(&locale.to_string())
            .or_else(|| lookup(locale.language()))
            .unwrap_or(Self::ROOT)
    }

    /// Every locale with an entry in the table.
    #[must_use]
    pub fn supported_locales() -> BTreeSet<Locale> {
        TABLE
            .iter()
            .filter_map(|(tag, _)| tag.parse().ok())
            .collect()
    }
}

const TABLE: &[(&str, LocaleSymbols)] = &[
    ("en", LocaleSymbols::ROOT),
    ("en-US", LocaleSymbols::ROOT),
    ("en-GB", LocaleSymbols::ROOT),
    ("en-SG", LocaleSymbols::ROOT),
    ("ja", LocaleSymbols::ROOT),
    ("ja-JP", LocaleSymbols::ROOT),
    ("de", LocaleSymbols::COMMA_DOT),
    ("de-DE", LocaleSymbols::COMMA_DOT),
    (
        "de-CH",
        LocaleSymbols {
            decimal: '.',
            grouping: '\'',
        },
    ),
    ("it", LocaleSymbols::COMMA_DOT),
    ("it-IT", LocaleSymbols::COMMA_DOT),
    (
        "it-CH",
        LocaleSymbols {
            decimal: '.',
            grouping: '\'',
        },
    ),
    ("es", LocaleSymbols::COMMA_DOT),
    ("es-ES", LocaleSymbols::COMMA_DOT),
    ("nl", LocaleSymbols::COMMA_DOT),
    ("nl-NL", LocaleSymbols::COMMA_DOT),
    ("id", LocaleSymbols::COMMA_DOT),
    ("id-ID", LocaleSymbols::COMMA_DOT),
    ("fr", LocaleSymbols::COMMA_NBSP),
    ("fr-FR", LocaleSymbols::COMMA_NBSP),
    ("fr-CH", LocaleSymbols::COMMA_NBSP),
];

fn lookup(tag: &str) -> Option<LocaleSymbols> {
    TABLE
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, symbols)| *symbols)
}
