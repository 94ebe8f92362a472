//! The measurement string resolver

use std::sync::Arc;

use tracing::debug;

use mensura_core::{
    CurrentLocaleProvider, EngineHandle, Locale, LocaleUnitEngine, MeasureUnit, NumberRenderer,
    UnitOptions, UnitStyle,
};
use mensura_locale::{DecimalRenderer, FluentUnitEngine, SystemLocaleProvider};
use mensura_units::Measurement;

/// Formats measurements and units into localized strings.
///
/// Long-lived and mutable: style, options and locale can be reassigned
/// between format calls. The formatter keeps one lazily-opened engine
/// handle per configuration; any write to `unit_options`, `unit_style`
/// or `locale` drops it, even when the new value equals the old one, so
/// a stale handle can never outlive a configuration change.
///
/// Not designed for concurrent mutation and use from multiple threads;
/// callers that share one instance must serialize access themselves.
pub struct MeasurementFormatter {
    options: UnitOptions,
    style: UnitStyle,
    locale: Option<Locale>,
    engine: Arc<dyn LocaleUnitEngine>,
    renderer: Box<dyn NumberRenderer>,
    locale_provider: Box<dyn CurrentLocaleProvider>,
    handle: Option<Box<dyn EngineHandle>>,
}

impl std::fmt::Debug for MeasurementFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementFormatter")
            .field("options", &self.options)
            .field("style", &self.style)
            .field("locale", &self.locale)
            .field("engine", &"<dyn LocaleUnitEngine>")
            .field("renderer", &"<dyn NumberRenderer>")
            .field("locale_provider", &"<dyn CurrentLocaleProvider>")
            .field("handle", &self.handle.as_ref().map(|_| "<dyn EngineHandle>"))
            .finish()
    }
}

impl MeasurementFormatter {
    /// A formatter with the default stack: the Fluent unit engine, a
    /// decimal renderer for the current locale, and the process locale.
    pub fn new() -> Self {
        let locale_provider = SystemLocaleProvider;
        let renderer = DecimalRenderer::new(&locale_provider.current());
        MeasurementFormatter {
            options: UnitOptions::default(),
            style: UnitStyle::default(),
            locale: None,
            engine: Arc::new(FluentUnitEngine::new()),
            renderer: Box::new(renderer),
            locale_provider: Box::new(locale_provider),
            handle: None,
        }
    }

    /// Replace the locale engine.
    pub fn with_engine(mut self, engine: Arc<dyn LocaleUnitEngine>) -> Self {
        self.engine = engine;
        self.handle = None;
        self
    }

    /// Replace the number renderer used on the fallback path.
    pub fn with_renderer(mut self, renderer: Box<dyn NumberRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the source of the ambient locale.
    pub fn with_locale_provider(mut self, provider: Box<dyn CurrentLocaleProvider>) -> Self {
        self.locale_provider = provider;
        self.handle = None;
        self
    }

    pub fn unit_options(&self) -> UnitOptions {
        self.options
    }

    pub fn set_unit_options(&mut self, options: UnitOptions) {
        self.options = options;
        self.handle = None;
    }

    pub fn unit_style(&self) -> UnitStyle {
        self.style
    }

    pub fn set_unit_style(&mut self, style: UnitStyle) {
        self.style = style;
        self.handle = None;
    }

    /// The locale formatting happens in: the configured one, or the
    /// ambient process locale when none was set.
    pub fn locale(&self) -> Locale {
        self.locale
            .clone()
            .unwrap_or_else(|| self.locale_provider.current())
    }

    /// The explicitly configured locale, if any. Restored archives leave
    /// this unset.
    pub fn configured_locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
        self.handle = None;
    }

    /// Format a measurement.
    ///
    /// Units carrying a canonical identifier delegate entirely to the
    /// engine; its output is returned verbatim. Unknown units, and any
    /// engine miss, compose `"<number> <symbol>"` from the number
    /// renderer and the unit's literal symbol.
    pub fn string_from<U: MeasureUnit>(&mut self, measurement: &Measurement<U>) -> String {
        let value = measurement.value();
        let options = self.options;
        if let Some(id) = measurement.unit().canonical_id() {
            if let Some(handle) = self.handle() {
                if let Some(formatted) = handle.value_unit(id, options, value) {
                    if !formatted.is_empty() {
                        return formatted;
                    }
                }
            }
            debug!(unit = id.name(), "engine lookup missed, using symbol fallback");
        }
        let number = self.renderer.render(value).unwrap_or_default();
        format!("{} {}", number, measurement.unit().symbol())
    }

    /// Format a bare unit name, without a value.
    ///
    /// Returns the engine's localized name when the unit has one at the
    /// current locale and style, and the literal symbol otherwise.
    pub fn unit_string<U: MeasureUnit>(&mut self, unit: &U) -> String {
        if let Some(id) = unit.canonical_id() {
            if let Some(handle) = self.handle() {
                if let Some(name) = handle.unit_name(id) {
                    return name;
                }
            }
            debug!(unit = id.name(), "engine has no name for unit, using symbol fallback");
        }
        unit.symbol().to_string()
    }

    /// The cached engine handle, opened on first use. A failed open is
    /// not cached; the next call retries against the engine.
    fn handle(&mut self) -> Option<&dyn EngineHandle> {
        if self.handle.is_none() {
            let locale = self.locale();
            self.handle = self.engine.open(&locale, self.style);
        }
        self.handle.as_deref()
    }
}

impl Default for MeasurementFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mensura_core::UnitId;
    use mensura_units::{CustomUnit, Measurement, UNITS};

    /// Engine whose handles echo their configuration, and which counts
    /// how often a handle was opened.
    struct EchoEngine {
        opens: Arc<AtomicUsize>,
    }

    struct EchoHandle {
        locale: Locale,
        style: UnitStyle,
    }

    impl LocaleUnitEngine for EchoEngine {
        fn open(&self, locale: &Locale, style: UnitStyle) -> Option<Box<dyn EngineHandle>> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Some(Box::new(EchoHandle {
                locale: locale.clone(),
                style,
            }))
        }
    }

    impl EngineHandle for EchoHandle {
        fn unit_name(&self, unit: UnitId) -> Option<String> {
            Some(format!("name:{}:{:?}", unit.name(), self.style))
        }

        fn value_unit(&self, unit: UnitId, options: UnitOptions, value: f64) -> Option<String> {
            Some(format!(
                "{}:{}:{:?}:{:?}:{}",
                self.locale,
                unit.name(),
                self.style,
                options,
                value
            ))
        }
    }

    /// Engine that never serves any locale.
    struct UnavailableEngine;

    impl LocaleUnitEngine for UnavailableEngine {
        fn open(&self, _locale: &Locale, _style: UnitStyle) -> Option<Box<dyn EngineHandle>> {
            None
        }
    }

    struct FixedRenderer(&'static str);

    impl NumberRenderer for FixedRenderer {
        fn render(&self, _value: f64) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct FailingRenderer;

    impl NumberRenderer for FailingRenderer {
        fn render(&self, _value: f64) -> Option<String> {
            None
        }
    }

    fn echo_formatter() -> (MeasurementFormatter, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        let mut formatter = MeasurementFormatter::new().with_engine(Arc::new(EchoEngine {
            opens: Arc::clone(&opens),
        }));
        formatter.set_locale("en".parse().unwrap());
        (formatter, opens)
    }

    fn kilometers(value: f64) -> Measurement<mensura_units::Unit> {
        Measurement::new(value, UNITS.get("km").unwrap().clone())
    }

    #[test]
    fn test_canonical_unit_delegates_to_engine() {
        let (mut formatter, _) = echo_formatter();
        let formatted = formatter.string_from(&kilometers(5.2));
        assert_eq!(formatted, "en:length-kilometer:Medium:UnitOptions(0x0):5.2");
    }

    #[test]
    fn test_unknown_unit_composes_number_and_symbol() {
        let mut formatter = MeasurementFormatter::new()
            .with_engine(Arc::new(UnavailableEngine))
            .with_renderer(Box::new(FixedRenderer("2")));
        let furlongs = Measurement::new(2.0, CustomUnit::new("furlong"));
        assert_eq!(formatter.string_from(&furlongs), "2 furlong");
    }

    #[test]
    fn test_unknown_unit_never_consults_engine() {
        let (mut formatter, opens) = echo_formatter();
        let furlongs = Measurement::new(2.0, CustomUnit::new("furlong"));
        formatter.string_from(&furlongs);
        assert_eq!(opens.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unit_string_returns_engine_name_verbatim() {
        let (mut formatter, _) = echo_formatter();
        let km = UNITS.get("km").unwrap().clone();
        assert_eq!(formatter.unit_string(&km), "name:length-kilometer:Medium");
    }

    #[test]
    fn test_unit_string_falls_back_to_symbol() {
        let (mut formatter, _) = echo_formatter();
        assert_eq!(formatter.unit_string(&CustomUnit::new("furlong")), "furlong");
    }

    #[test]
    fn test_engine_unavailable_falls_back() {
        let mut formatter = MeasurementFormatter::new()
            .with_engine(Arc::new(UnavailableEngine))
            .with_renderer(Box::new(FixedRenderer("5.2")));
        assert_eq!(formatter.string_from(&kilometers(5.2)), "5.2 km");
        assert_eq!(formatter.unit_string(UNITS.get("km").unwrap()), "km");
    }

    #[test]
    fn test_renderer_failure_leaves_empty_number_part() {
        let mut formatter = MeasurementFormatter::new()
            .with_engine(Arc::new(UnavailableEngine))
            .with_renderer(Box::new(FailingRenderer));
        let furlongs = Measurement::new(2.0, CustomUnit::new("furlong"));
        assert_eq!(formatter.string_from(&furlongs), " furlong");
    }

    #[test]
    fn test_repeated_calls_reuse_the_handle() {
        let (mut formatter, opens) = echo_formatter();
        let first = formatter.string_from(&kilometers(5.2));
        let second = formatter.string_from(&kilometers(5.2));
        assert_eq!(first, second);
        assert_eq!(opens.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_style_change_invalidates_handle() {
        let (mut formatter, opens) = echo_formatter();
        let before = formatter.string_from(&kilometers(5.2));
        formatter.set_unit_style(UnitStyle::Long);
        let after = formatter.string_from(&kilometers(5.2));
        assert_ne!(before, after);
        assert!(after.contains("Long"));
        assert_eq!(opens.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_locale_change_invalidates_handle() {
        let (mut formatter, opens) = echo_formatter();
        let before = formatter.string_from(&kilometers(5.2));
        formatter.set_locale("de".parse().unwrap());
        let after = formatter.string_from(&kilometers(5.2));
        assert!(before.starts_with("en:"));
        assert!(after.starts_with("de:"));
        assert_eq!(opens.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_options_change_invalidates_handle() {
        let (mut formatter, opens) = echo_formatter();
        formatter.string_from(&kilometers(5.2));
        formatter.set_unit_options(UnitOptions::PROVIDED_UNIT);
        let after = formatter.string_from(&kilometers(5.2));
        assert!(after.contains("PROVIDED_UNIT"));
        assert_eq!(opens.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reassigning_equal_value_still_invalidates() {
        let (mut formatter, opens) = echo_formatter();
        formatter.string_from(&kilometers(5.2));
        formatter.set_unit_style(formatter.unit_style());
        formatter.string_from(&kilometers(5.2));
        assert_eq!(opens.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failed_open_is_retried() {
        let mut formatter = MeasurementFormatter::new()
            .with_engine(Arc::new(UnavailableEngine))
            .with_renderer(Box::new(FixedRenderer("1")));
        formatter.string_from(&kilometers(1.0));
        // Swapping in a working engine afterwards must take effect: the
        // failed open was not cached.
        let opens = Arc::new(AtomicUsize::new(0));
        formatter = formatter.with_engine(Arc::new(EchoEngine {
            opens: Arc::clone(&opens),
        }));
        formatter.set_locale("en".parse().unwrap());
        let formatted = formatter.string_from(&kilometers(1.0));
        assert!(formatted.starts_with("en:length-kilometer"));
    }
}
