//! Restoring formatters from archived records
//!
//! Read-compatibility only: a formatter record carries the option
//! bit-set and the style ordinal, and can be decoded solely from keyed,
//! self-describing encodings. Positional encodings are rejected
//! outright rather than guessed at. Writing archives is intentionally
//! unsupported.
//!
//! Restored formatters come back with their locale and number renderer
//! at defaults - the record does not carry either. This degraded
//! restore is deliberate and logged, not silent; callers that need a
//! particular locale must reconfigure it after decoding.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use tracing::warn;

use mensura_core::{FormatError, UnitOptions, UnitStyle};

use crate::MeasurementFormatter;

const FIELD_OPTIONS: &str = "unitOptions";
const FIELD_STYLE: &str = "unitStyle";
const FIELDS: &[&str] = &[FIELD_OPTIONS, FIELD_STYLE];

impl<'de> Deserialize<'de> for MeasurementFormatter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("MeasurementFormatter", FIELDS, ArchiveVisitor)
    }
}

struct ArchiveVisitor;

impl<'de> Visitor<'de> for ArchiveVisitor {
    type Value = MeasurementFormatter;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a keyed measurement formatter record")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut options: Option<u64> = None;
        let mut style: Option<u64> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                FIELD_OPTIONS => options = Some(map.next_value()?),
                FIELD_STYLE => style = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let mut formatter = MeasurementFormatter::new();
        if let Some(bits) = options {
            formatter.set_unit_options(UnitOptions::from_bits_truncate(bits as u8));
        }
        if let Some(ordinal) = style {
            let style = UnitStyle::from_ordinal(ordinal)
                .ok_or_else(|| de::Error::custom(FormatError::UnknownStyleOrdinal(ordinal)))?;
            formatter.set_unit_style(style);
        }
        warn!("formatter records carry no locale or number renderer; restored formatter uses defaults");
        Ok(formatter)
    }

    // Positional archives cannot tell fields apart; refuse them instead
    // of producing a half-initialized formatter.
    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Err(de::Error::custom(FormatError::UnsupportedDecodingFormat))
    }
}
