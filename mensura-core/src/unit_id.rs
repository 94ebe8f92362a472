//! Canonical unit identifiers
//!
//! A `UnitId` names a unit to the locale engine. It is distinct from a
//! unit's display symbol: the symbol is what we print when the engine
//! has nothing better, the identifier is the key into the engine's
//! per-locale name tables. Units without an identifier are unknown to
//! the engine and always format through the symbol fallback.

use serde::{Deserialize, Serialize};

/// The closed set of units the locale engine can localize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitId {
    // Length
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    // Mass
    Kilogram,
    Gram,
    Milligram,
    MetricTon,
    Pound,
    Ounce,
    // Duration
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Speed
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    // Volume
    Liter,
    Milliliter,
    Gallon,
    Quart,
    Cup,
    FluidOunce,
    // Energy
    Joule,
    Kilojoule,
    Calorie,
    Kilocalorie,
    // Power
    Watt,
    Kilowatt,
    Horsepower,
    // Pressure
    Hectopascal,
    Millibar,
    PoundPerSquareInch,
    // Data
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl UnitId {
    /// The engine-facing name of this unit, in CLDR `category-unit` form.
    /// Doubles as the message key in translation resources.
    pub fn name(self) -> &'static str {
        match self {
            UnitId::Meter => "length-meter",
            UnitId::Kilometer => "length-kilometer",
            UnitId::Centimeter => "length-centimeter",
            UnitId::Millimeter => "length-millimeter",
            UnitId::Inch => "length-inch",
            UnitId::Foot => "length-foot",
            UnitId::Yard => "length-yard",
            UnitId::Mile => "length-mile",
            UnitId::NauticalMile => "length-nautical-mile",
            UnitId::Kilogram => "mass-kilogram",
            UnitId::Gram => "mass-gram",
            UnitId::Milligram => "mass-milligram",
            UnitId::MetricTon => "mass-metric-ton",
            UnitId::Pound => "mass-pound",
            UnitId::Ounce => "mass-ounce",
            UnitId::Millisecond => "duration-millisecond",
            UnitId::Second => "duration-second",
            UnitId::Minute => "duration-minute",
            UnitId::Hour => "duration-hour",
            UnitId::Day => "duration-day",
            UnitId::Week => "duration-week",
            UnitId::Year => "duration-year",
            UnitId::Celsius => "temperature-celsius",
            UnitId::Fahrenheit => "temperature-fahrenheit",
            UnitId::Kelvin => "temperature-kelvin",
            UnitId::MeterPerSecond => "speed-meter-per-second",
            UnitId::KilometerPerHour => "speed-kilometer-per-hour",
            UnitId::MilePerHour => "speed-mile-per-hour",
            UnitId::Knot => "speed-knot",
            UnitId::Liter => "volume-liter",
            UnitId::Milliliter => "volume-milliliter",
            UnitId::Gallon => "volume-gallon",
            UnitId::Quart => "volume-quart",
            UnitId::Cup => "volume-cup",
            UnitId::FluidOunce => "volume-fluid-ounce",
            UnitId::Joule => "energy-joule",
            UnitId::Kilojoule => "energy-kilojoule",
            UnitId::Calorie => "energy-calorie",
            UnitId::Kilocalorie => "energy-kilocalorie",
            UnitId::Watt => "power-watt",
            UnitId::Kilowatt => "power-kilowatt",
            UnitId::Horsepower => "power-horsepower",
            UnitId::Hectopascal => "pressure-hectopascal",
            UnitId::Millibar => "pressure-millibar",
            UnitId::PoundPerSquareInch => "pressure-pound-per-square-inch",
            UnitId::Bit => "data-bit",
            UnitId::Byte => "data-byte",
            UnitId::Kilobyte => "data-kilobyte",
            UnitId::Megabyte => "data-megabyte",
            UnitId::Gigabyte => "data-gigabyte",
            UnitId::Terabyte => "data-terabyte",
        }
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
