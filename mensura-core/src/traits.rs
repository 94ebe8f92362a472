//! Collaborator traits
//!
//! The resolver in `mensura-format` is a thin adapter: everything
//! locale-sensitive sits behind these seams so it can be swapped or
//! mocked. `mensura-locale` ships the default implementations.

use crate::{Locale, UnitId, UnitOptions, UnitStyle};

/// Capability set of a formattable unit: a display symbol that is always
/// present, and an optional canonical identifier for units the locale
/// engine knows. Identity only - units carry no behavior of their own.
pub trait MeasureUnit {
    /// The literal display symbol, e.g. `"km"`. Used verbatim when the
    /// engine cannot localize the unit.
    fn symbol(&self) -> &str;

    /// The canonical engine identifier, or `None` for unknown units.
    fn canonical_id(&self) -> Option<UnitId>;
}

impl<T: MeasureUnit + ?Sized> MeasureUnit for &T {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn canonical_id(&self) -> Option<UnitId> {
        (**self).canonical_id()
    }
}

/// An opened engine session for one (locale, style) pair.
///
/// Handles are owned snapshots: they stay valid regardless of later
/// engine or formatter mutation, which is what lets the resolver cache
/// one until its configuration changes.
pub trait EngineHandle {
    /// The localized bare name of a unit, without any value attached.
    /// `None` when the engine has no table entry for the unit.
    fn unit_name(&self, unit: UnitId) -> Option<String>;

    /// A localized compound value+unit string. The engine owns plural
    /// selection, locale-preferred unit substitution and natural-scale
    /// rescaling as steered by `options`. `None` signals a lookup miss
    /// and sends the caller down its fallback path.
    fn value_unit(&self, unit: UnitId, options: UnitOptions, value: f64) -> Option<String>;
}

/// Factory for engine handles.
pub trait LocaleUnitEngine: Send + Sync {
    /// Open a handle for the given locale and style. `None` when the
    /// engine cannot serve the locale at all.
    fn open(&self, locale: &Locale, style: UnitStyle) -> Option<Box<dyn EngineHandle>>;
}

/// Renders a numeric value as a localized decimal string. Supplied to the
/// resolver by the caller; the resolver only invokes it and never
/// configures it.
pub trait NumberRenderer: Send + Sync {
    /// `None` when the value cannot be rendered; the resolver treats
    /// that as an empty number part rather than an error.
    fn render(&self, value: f64) -> Option<String>;
}

/// Source of the ambient process locale, injected rather than read from
/// a hidden global so resolvers stay deterministic under test.
pub trait CurrentLocaleProvider: Send + Sync {
    fn current(&self) -> Locale;
}
