//! Mensura Locale - Default Locale Engine and Number Rendering
//!
//! Ships the working implementations behind the `mensura-core`
//! collaborator traits:
//! - `FluentUnitEngine`: per-locale unit name tables as embedded Fluent
//!   resources, with CLDR plural selection, locale-preferred unit
//!   substitution and natural-scale rescaling
//! - `DecimalRenderer`: locale-aware decimal strings via ICU4X
//! - `SystemLocaleProvider`: the ambient process locale
//!
//! Translation coverage is deliberately partial outside English: a unit
//! missing from a locale's table is a lookup miss, and the formatter
//! degrades to its symbol fallback instead of failing.

mod decimal;
mod engine;
mod prefer;
mod system;

pub use decimal::DecimalRenderer;
pub use engine::FluentUnitEngine;
pub use system::SystemLocaleProvider;
