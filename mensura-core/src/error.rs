//! Errors for formatter configuration and archive decoding
//!
//! Formatting itself never fails: lookup misses degrade to symbol
//! fallbacks inside the resolver. The errors here cover the two places
//! where a caller can actually hand us something unusable - a malformed
//! locale identifier, or an archived record we cannot restore from.

use thiserror::Error;

/// Error type for formatter restoration and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The archive was written with a positional encoder. Formatter
    /// records can only be restored from keyed, self-describing fields.
    #[error("formatter archives require a keyed encoding; positional archives cannot be decoded")]
    UnsupportedDecodingFormat,

    /// The archived style ordinal does not name a known `UnitStyle`.
    #[error("unknown unit style ordinal {0}")]
    UnknownStyleOrdinal(u64),

    /// The string is not a valid BCP 47 language identifier.
    #[error("invalid locale identifier: {0}")]
    InvalidLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FormatError::UnsupportedDecodingFormat;
        assert!(err.to_string().contains("keyed encoding"));

        let err = FormatError::UnknownStyleOrdinal(9);
        assert_eq!(err.to_string(), "unknown unit style ordinal 9");
    }
}
