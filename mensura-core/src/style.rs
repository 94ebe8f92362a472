//! Output verbosity styles

use serde::{Deserialize, Serialize};

/// Verbosity of formatted measurement output.
///
/// The three styles map onto the engine's formatting widths: `Long`
/// selects wide output ("5 kilometers"), `Medium` the abbreviated form
/// ("5 km"), and `Short` the narrowest form ("5km").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    Short,
    #[default]
    Medium,
    Long,
}

impl UnitStyle {
    /// The integer ordinal used by archived formatter records.
    pub fn ordinal(self) -> u64 {
        match self {
            UnitStyle::Short => 1,
            UnitStyle::Medium => 2,
            UnitStyle::Long => 3,
        }
    }

    /// Resolve an archived ordinal back to a style.
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        match ordinal {
            1 => Some(UnitStyle::Short),
            2 => Some(UnitStyle::Medium),
            3 => Some(UnitStyle::Long),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(UnitStyle::default(), UnitStyle::Medium);
    }

    #[test]
    fn test_ordinal_round_trip() {
        for style in [UnitStyle::Short, UnitStyle::Medium, UnitStyle::Long] {
            assert_eq!(UnitStyle::from_ordinal(style.ordinal()), Some(style));
        }
        assert_eq!(UnitStyle::from_ordinal(0), None);
        assert_eq!(UnitStyle::from_ordinal(4), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&UnitStyle::Long).unwrap(), "\"long\"");
        assert_eq!(serde_json::from_str::<UnitStyle>("\"short\"").unwrap(), UnitStyle::Short);
    }
}
