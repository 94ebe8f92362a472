//! Mensura Units - Unit Catalog and Conversion
//!
//! Provides the unit definitions behind measurement formatting: symbols,
//! canonical engine identifiers, categories, measurement systems and the
//! conversion factors between unit variants.
//!
//! Categories:
//! - Length (m, km, ft, mi, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Duration (ms, s, min, h, d, wk, yr)
//! - Temperature (K, °C, °F)
//! - Speed (m/s, km/h, mph, kn)
//! - Volume (L, mL, gal, qt, etc.)
//! - Energy (J, kJ, cal, kcal)
//! - Power (W, kW, hp)
//! - Pressure (hPa, mbar, psi)
//! - Data (bit, B, kB, MB, GB, TB)

mod catalog;
mod measurement;
mod unit;

pub use catalog::{UnitCatalog, UNITS};
pub use measurement::Measurement;
pub use unit::{Category, ConversionError, CustomUnit, Unit, UnitSystem};
