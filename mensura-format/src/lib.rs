//! Mensura Format - Measurement String Resolution
//!
//! `MeasurementFormatter` turns measurements into localized strings. It
//! is a thin resolver: units with a canonical identifier are delegated
//! to the locale engine, which owns plural rules, per-locale unit names
//! and unit-system preferences; units the engine does not know fall
//! back to a rendered number plus the unit's literal symbol. Formatting
//! never fails - the worst case is a less-localized string.
//!
//! ```
//! use mensura_format::MeasurementFormatter;
//! use mensura_units::{Measurement, UNITS};
//!
//! let mut formatter = MeasurementFormatter::new();
//! formatter.set_locale("en-US".parse().unwrap());
//!
//! let distance = Measurement::new(5.2, UNITS.get("km").unwrap().clone());
//! // A US locale prefers miles: "3.231 mi"
//! let formatted = formatter.string_from(&distance);
//! assert!(!formatted.is_empty());
//! ```

mod archive;
mod formatter;

pub use formatter::MeasurementFormatter;
