//! Locale identification

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::FormatError;

/// A language/region identifier driving localized output.
///
/// Wraps a BCP 47 language identifier. The language subtag selects the
/// translation tables, the region subtag selects unit-system preferences
/// (a `US` region prefers miles over kilometers).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    pub fn new(id: LanguageIdentifier) -> Self {
        Locale(id)
    }

    /// Parse a locale from a BCP 47 string such as `"en-US"` or `"ru"`.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        s.parse::<LanguageIdentifier>()
            .map(Locale)
            .map_err(|_| FormatError::InvalidLocale(s.to_string()))
    }

    /// The language subtag, e.g. `"en"`.
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// The region subtag if present, e.g. `"US"`.
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|r| r.as_str())
    }

    pub fn id(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Locale(id)
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_and_region() {
        let locale = Locale::parse("en-US").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("US"));
    }

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("ru").unwrap();
        assert_eq!(locale.language(), "ru");
        assert_eq!(locale.region(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Locale::parse("not a locale"),
            Err(FormatError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let locale = Locale::parse("de-DE").unwrap();
        assert_eq!(locale.to_string(), "de-DE");
    }
}
