//! Unit catalog - the ~50 units the locale engine can localize

use std::collections::HashMap;
use std::sync::LazyLock;

use mensura_core::UnitId;

use crate::{Category, Unit, UnitSystem};

/// Global unit catalog
pub static UNITS: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Registry of all cataloged units, indexed by symbol, word alias and
/// canonical identifier.
pub struct UnitCatalog {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
    by_id: HashMap<UnitId, String>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
            aliases: HashMap::new(),
            by_id: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        None
    }

    /// Get a unit by its canonical identifier
    pub fn by_id(&self, id: UnitId) -> Option<&Unit> {
        self.by_id.get(&id).and_then(|symbol| self.units.get(symbol))
    }

    /// Get all units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.values().filter(|u| u.category == category).collect()
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: Unit) {
        if let Some(id) = unit.canonical {
            self.by_id.insert(id, unit.symbol.clone());
        }
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_duration_units();
        self.register_temperature_units();
        self.register_speed_units();
        self.register_volume_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_data_units();
    }

    fn register_length_units(&mut self) {
        use Category::Length;
        use UnitSystem::{Metric, Universal, UsCustomary};

        self.register(Unit::new("m", "meter", UnitId::Meter, Length, Metric, 1.0));
        self.register(Unit::new("km", "kilometer", UnitId::Kilometer, Length, Metric, 1000.0));
        self.register(Unit::new("cm", "centimeter", UnitId::Centimeter, Length, Metric, 0.01));
        self.register(Unit::new("mm", "millimeter", UnitId::Millimeter, Length, Metric, 0.001));
        self.register(Unit::new("in", "inch", UnitId::Inch, Length, UsCustomary, 0.0254));
        self.register(Unit::new("ft", "foot", UnitId::Foot, Length, UsCustomary, 0.3048));
        self.register(Unit::new("yd", "yard", UnitId::Yard, Length, UsCustomary, 0.9144));
        self.register(Unit::new("mi", "mile", UnitId::Mile, Length, UsCustomary, 1609.344));
        self.register(Unit::new("nmi", "nautical mile", UnitId::NauticalMile, Length, Universal, 1852.0));

        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("kilometer", "km");
        self.alias("kilometers", "km");
        self.alias("inch", "in");
        self.alias("inches", "in");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("mile", "mi");
        self.alias("miles", "mi");
    }

    fn register_mass_units(&mut self) {
        use Category::Mass;
        use UnitSystem::{Metric, UsCustomary};

        self.register(Unit::new("kg", "kilogram", UnitId::Kilogram, Mass, Metric, 1.0));
        self.register(Unit::new("g", "gram", UnitId::Gram, Mass, Metric, 0.001));
        self.register(Unit::new("mg", "milligram", UnitId::Milligram, Mass, Metric, 1e-6));
        self.register(Unit::new("t", "metric ton", UnitId::MetricTon, Mass, Metric, 1000.0));
        self.register(Unit::new("lb", "pound", UnitId::Pound, Mass, UsCustomary, 0.453_592_37));
        self.register(Unit::new("oz", "ounce", UnitId::Ounce, Mass, UsCustomary, 0.028_349_523_125));

        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("ounce", "oz");
        self.alias("ounces", "oz");
    }

    fn register_duration_units(&mut self) {
        use Category::Duration;
        use UnitSystem::Universal;

        self.register(Unit::new("ms", "millisecond", UnitId::Millisecond, Duration, Universal, 0.001));
        self.register(Unit::new("s", "second", UnitId::Second, Duration, Universal, 1.0));
        self.register(Unit::new("min", "minute", UnitId::Minute, Duration, Universal, 60.0));
        self.register(Unit::new("h", "hour", UnitId::Hour, Duration, Universal, 3600.0));
        self.register(Unit::new("d", "day", UnitId::Day, Duration, Universal, 86_400.0));
        self.register(Unit::new("wk", "week", UnitId::Week, Duration, Universal, 604_800.0));
        // Mean Gregorian year
        self.register(Unit::new("yr", "year", UnitId::Year, Duration, Universal, 31_556_952.0));

        self.alias("second", "s");
        self.alias("seconds", "s");
        self.alias("minute", "min");
        self.alias("minutes", "min");
        self.alias("hour", "h");
        self.alias("hours", "h");
        self.alias("day", "d");
        self.alias("days", "d");
    }

    fn register_temperature_units(&mut self) {
        use Category::Temperature;
        use UnitSystem::{Metric, Universal, UsCustomary};

        // Base unit: kelvin
        self.register(Unit::new("K", "kelvin", UnitId::Kelvin, Temperature, Universal, 1.0));
        self.register(Unit::with_offset(
            "°C", "degree Celsius", UnitId::Celsius, Temperature, Metric, 1.0, 273.15,
        ));
        self.register(Unit::with_offset(
            "°F",
            "degree Fahrenheit",
            UnitId::Fahrenheit,
            Temperature,
            UsCustomary,
            5.0 / 9.0,
            255.372_222_222_222_2,
        ));

        self.alias("celsius", "°C");
        self.alias("fahrenheit", "°F");
        self.alias("kelvin", "K");
    }

    fn register_speed_units(&mut self) {
        use Category::Speed;
        use UnitSystem::{Metric, Universal, UsCustomary};

        self.register(Unit::new("m/s", "meter per second", UnitId::MeterPerSecond, Speed, Metric, 1.0));
        self.register(Unit::new(
            "km/h",
            "kilometer per hour",
            UnitId::KilometerPerHour,
            Speed,
            Metric,
            1.0 / 3.6,
        ));
        self.register(Unit::new("mph", "mile per hour", UnitId::MilePerHour, Speed, UsCustomary, 0.447_04));
        self.register(Unit::new("kn", "knot", UnitId::Knot, Speed, Universal, 1852.0 / 3600.0));

        self.alias("knot", "kn");
        self.alias("knots", "kn");
    }

    fn register_volume_units(&mut self) {
        use Category::Volume;
        use UnitSystem::{Metric, UsCustomary};

        self.register(Unit::new("L", "liter", UnitId::Liter, Volume, Metric, 1.0));
        self.register(Unit::new("mL", "milliliter", UnitId::Milliliter, Volume, Metric, 0.001));
        self.register(Unit::new("gal", "gallon", UnitId::Gallon, Volume, UsCustomary, 3.785_411_784));
        self.register(Unit::new("qt", "quart", UnitId::Quart, Volume, UsCustomary, 0.946_352_946));
        self.register(Unit::new("cup", "cup", UnitId::Cup, Volume, UsCustomary, 0.236_588_236_5));
        self.register(Unit::new(
            "fl oz",
            "fluid ounce",
            UnitId::FluidOunce,
            Volume,
            UsCustomary,
            0.029_573_529_562_5,
        ));

        self.alias("liter", "L");
        self.alias("liters", "L");
        self.alias("litre", "L");
        self.alias("litres", "L");
        self.alias("gallon", "gal");
        self.alias("gallons", "gal");
    }

    fn register_energy_units(&mut self) {
        use Category::Energy;
        use UnitSystem::Metric;

        self.register(Unit::new("J", "joule", UnitId::Joule, Energy, Metric, 1.0));
        self.register(Unit::new("kJ", "kilojoule", UnitId::Kilojoule, Energy, Metric, 1000.0));
        self.register(Unit::new("cal", "calorie", UnitId::Calorie, Energy, Metric, 4.184));
        self.register(Unit::new("kcal", "kilocalorie", UnitId::Kilocalorie, Energy, Metric, 4184.0));

        self.alias("calorie", "cal");
        self.alias("calories", "cal");
    }

    fn register_power_units(&mut self) {
        use Category::Power;
        use UnitSystem::{Metric, UsCustomary};

        self.register(Unit::new("W", "watt", UnitId::Watt, Power, Metric, 1.0));
        self.register(Unit::new("kW", "kilowatt", UnitId::Kilowatt, Power, Metric, 1000.0));
        self.register(Unit::new("hp", "horsepower", UnitId::Horsepower, Power, UsCustomary, 745.699_871_582_270_2));

        self.alias("watt", "W");
        self.alias("watts", "W");
        self.alias("horsepower", "hp");
    }

    fn register_pressure_units(&mut self) {
        use Category::Pressure;
        use UnitSystem::{Metric, UsCustomary};

        // Base unit: hectopascal
        self.register(Unit::new("hPa", "hectopascal", UnitId::Hectopascal, Pressure, Metric, 1.0));
        self.register(Unit::new("mbar", "millibar", UnitId::Millibar, Pressure, Metric, 1.0));
        self.register(Unit::new(
            "psi",
            "pound per square inch",
            UnitId::PoundPerSquareInch,
            Pressure,
            UsCustomary,
            68.947_572_931_683_6,
        ));
    }

    fn register_data_units(&mut self) {
        use Category::Data;
        use UnitSystem::Universal;

        self.register(Unit::new("bit", "bit", UnitId::Bit, Data, Universal, 0.125));
        self.register(Unit::new("B", "byte", UnitId::Byte, Data, Universal, 1.0));
        self.register(Unit::new("kB", "kilobyte", UnitId::Kilobyte, Data, Universal, 1e3));
        self.register(Unit::new("MB", "megabyte", UnitId::Megabyte, Data, Universal, 1e6));
        self.register(Unit::new("GB", "gigabyte", UnitId::Gigabyte, Data, Universal, 1e9));
        self.register(Unit::new("TB", "terabyte", UnitId::Terabyte, Data, Universal, 1e12));

        self.alias("byte", "B");
        self.alias("bytes", "B");
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
