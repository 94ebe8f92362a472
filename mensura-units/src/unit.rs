//! Unit representation with conversion factors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mensura_core::{MeasureUnit, UnitId};

/// What kind of quantity a unit measures. Units convert only within
/// their own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Duration,
    Temperature,
    Speed,
    Volume,
    Energy,
    Power,
    Pressure,
    Data,
}

/// The measurement system a unit belongs to. Drives locale-preferred
/// substitution and keeps natural-scale rescaling inside one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    UsCustomary,
    /// System-neutral units: durations, nautical units, data sizes.
    Universal,
}

/// A catalog unit: display symbol, canonical engine identifier, and the
/// affine conversion to its category's base unit
/// (`base = value * factor + offset`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g. "km", "lb", "°C")
    pub symbol: String,
    /// Locale-independent unit name (e.g. "kilometer")
    pub name: String,
    /// Canonical identifier known to the locale engine
    pub canonical: Option<UnitId>,
    pub category: Category,
    pub system: UnitSystem,
    /// Factor to the category base unit
    pub to_base_factor: f64,
    /// Offset for non-proportional units (temperature scales)
    pub to_base_offset: f64,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn new(
        symbol: &str,
        name: &str,
        canonical: UnitId,
        category: Category,
        system: UnitSystem,
        to_base_factor: f64,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            canonical: Some(canonical),
            category,
            system,
            to_base_factor,
            to_base_offset: 0.0,
        }
    }

    /// Create a unit with offset (temperature scales)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        canonical: UnitId,
        category: Category,
        system: UnitSystem,
        to_base_factor: f64,
        to_base_offset: f64,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            canonical: Some(canonical),
            category,
            system,
            to_base_factor,
            to_base_offset,
        }
    }

    /// Check if this unit converts proportionally (no offset)
    pub fn is_proportional(&self) -> bool {
        self.to_base_offset == 0.0
    }

    /// Check if two units are compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.to_base_factor + self.to_base_offset
    }

    /// Convert a value from the category base unit to this unit
    pub fn from_base(&self, base_value: f64) -> f64 {
        (base_value - self.to_base_offset) / self.to_base_factor
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleCategories {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_category: self.category,
                to_category: target.category,
            });
        }
        Ok(target.from_base(self.to_base(value)))
    }
}

impl MeasureUnit for Unit {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn canonical_id(&self) -> Option<UnitId> {
        self.canonical
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A unit identified only by its display symbol, unknown to the locale
/// engine. Formatting such units always goes through the symbol
/// fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomUnit {
    symbol: String,
}

impl CustomUnit {
    pub fn new(symbol: impl Into<String>) -> Self {
        CustomUnit {
            symbol: symbol.into(),
        }
    }
}

impl MeasureUnit for CustomUnit {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn canonical_id(&self) -> Option<UnitId> {
        None
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units measure different kinds of quantity
    #[error("cannot convert {from} ({from_category:?}) to {to} ({to_category:?}): incompatible categories")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },
    /// Symbol or identifier missing from the catalog
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", UnitId::Meter, Category::Length, UnitSystem::Metric, 1.0)
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", UnitId::Kilometer, Category::Length, UnitSystem::Metric, 1000.0)
    }

    fn second() -> Unit {
        Unit::new("s", "second", UnitId::Second, Category::Duration, UnitSystem::Universal, 1.0)
    }

    fn celsius() -> Unit {
        Unit::with_offset(
            "°C",
            "degree Celsius",
            UnitId::Celsius,
            Category::Temperature,
            UnitSystem::Metric,
            1.0,
            273.15,
        )
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_proportional_conversion() {
        let converted = meter().convert_to(5000.0, &kilometer()).unwrap();
        assert_eq!(converted, 5.0);
    }

    #[test]
    fn test_affine_conversion() {
        // 20 °C = 293.15 K
        assert!((celsius().to_base(20.0) - 293.15).abs() < 1e-9);
        assert!(!celsius().is_proportional());
    }

    #[test]
    fn test_incompatible_conversion_fails() {
        let err = meter().convert_to(1.0, &second()).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleCategories { .. }));
    }

    #[test]
    fn test_custom_unit_has_no_canonical_id() {
        let furlong = CustomUnit::new("furlong");
        assert_eq!(furlong.symbol(), "furlong");
        assert_eq!(furlong.canonical_id(), None);
    }
}
