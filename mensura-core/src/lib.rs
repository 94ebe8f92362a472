//! Mensura Core - Shared Vocabulary for Measurement Formatting
//!
//! Holds the types every other Mensura crate speaks:
//! - `UnitStyle` and `UnitOptions`: how verbose and how localized output is
//! - `Locale`: language/region conventions for formatting
//! - `UnitId`: canonical identifiers the locale engine understands
//! - Collaborator traits: `LocaleUnitEngine`, `EngineHandle`,
//!   `NumberRenderer`, `CurrentLocaleProvider`, `MeasureUnit`

mod error;
mod locale;
mod options;
mod style;
mod traits;
mod unit_id;

pub use error::FormatError;
pub use locale::Locale;
pub use options::UnitOptions;
pub use style::UnitStyle;
pub use traits::{CurrentLocaleProvider, EngineHandle, LocaleUnitEngine, MeasureUnit, NumberRenderer};
pub use unit_id::UnitId;
