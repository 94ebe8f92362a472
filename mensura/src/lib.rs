//! Mensura - Localized Measurement Formatting
//!
//! Formats physical measurements (a value and a unit) into localized,
//! human-readable strings:
//!
//! ```
//! use mensura::{Measurement, MeasurementFormatter, UnitStyle, UNITS};
//!
//! let mut formatter = MeasurementFormatter::new();
//! formatter.set_locale("en".parse().unwrap());
//! formatter.set_unit_style(UnitStyle::Long);
//!
//! let distance = Measurement::new(2.0, UNITS.get("km").unwrap().clone());
//! assert_eq!(formatter.string_from(&distance), "2 kilometers");
//! ```
//!
//! Unit names, plural selection and unit-system preferences (a US
//! locale sees kilometers as miles) come from the locale engine; units
//! the engine does not know render as a localized number followed by
//! the unit's literal symbol.

pub use mensura_core::{
    CurrentLocaleProvider, EngineHandle, FormatError, Locale, LocaleUnitEngine, MeasureUnit,
    NumberRenderer, UnitId, UnitOptions, UnitStyle,
};
pub use mensura_format::MeasurementFormatter;
pub use mensura_locale::{DecimalRenderer, FluentUnitEngine, SystemLocaleProvider};
pub use mensura_units::{
    Category, ConversionError, CustomUnit, Measurement, Unit, UnitCatalog, UnitSystem, UNITS,
};
