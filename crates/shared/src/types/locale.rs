//! Locale identity used to select presentation conventions.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// A language with an optional region, e.g. `de` or `de-CH`.
///
/// Language is stored lowercase, region uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Creates a locale from its subtags, normalizing case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the language is not 2-3 ASCII letters or
    /// the region is not 2 ASCII letters / 3 digits.
    pub fn new(language: &str, region: Option<&str>) -> Result<Self, MoneyError> {
        let valid_language =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        if !valid_language {
            return Err(MoneyError::invalid(format!("malformed language: {language:?}")));
        }
        if let Some(region) = region {
            let valid_region = (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
                || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()));
            if !valid_region {
                return Err(MoneyError::invalid(format!("malformed region: {region:?}")));
            }
        }
        Ok(Self {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        })
    }

    /// Language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The same locale without its region.
    #[must_use]
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(MoneyError::invalid(format!("unsupported locale tag: {s:?}")));
        }
        Self::new(language, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("de", "de", None)]
    #[case("de-CH", "de", Some("CH"))]
    #[case("de_ch", "de", Some("CH"))]
    #[case("EN-us", "en", Some("US"))]
    #[case("es-419", "es", Some("419"))]
    fn test_parse_valid(#[case] tag: &str, #[case] language: &str, #[case] region: Option<&str>) {
        let locale = Locale::from_str(tag).unwrap();
        assert_eq!(locale.language(), language);
        assert_eq!(locale.region(), region);
    }

    #[rstest]
    #[case("")]
    #[case("d")]
    #[case("de-CHE")]
    #[case("de-CH-x")]
    #[case("12")]
    fn test_parse_invalid(#[case] tag: &str) {
        let err = Locale::from_str(tag).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_display_round_trips_tag() {
        let locale = Locale::new("fr", Some("ch")).unwrap();
        assert_eq!(locale.to_string(), "fr-CH");
        assert_eq!(locale.language_only().to_string(), "fr");
    }
}
