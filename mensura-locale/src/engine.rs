//! Fluent-backed locale/unit engine
//!
//! Unit name tables live in embedded Fluent resources, one file per
//! locale. Every catalog unit has one message keyed by its canonical
//! identifier, with attributes for the wide, short and narrow value
//! patterns and for the bare display names. Plural selection inside the
//! wide patterns uses Fluent's CLDR cardinal rules.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

use mensura_core::{EngineHandle, Locale, LocaleUnitEngine, UnitId, UnitOptions, UnitStyle};
use mensura_units::{Category, Unit, UNITS};

use crate::decimal::DecimalRenderer;
use crate::prefer;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Resources;

static SHARED: LazyLock<Arc<EngineData>> = LazyLock::new(|| Arc::new(EngineData::load()));

/// The default `LocaleUnitEngine`: localizes catalog units through
/// embedded Fluent tables. Cheap to clone and share; the underlying
/// bundles are loaded once per process.
#[derive(Clone)]
pub struct FluentUnitEngine {
    data: Arc<EngineData>,
}

impl FluentUnitEngine {
    pub fn new() -> Self {
        FluentUnitEngine {
            data: Arc::clone(&SHARED),
        }
    }

    /// Locales with a translation table of their own.
    pub fn available_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.data.bundles.keys().cloned().map(Locale::new).collect();
        locales.sort_by_key(|l| l.to_string());
        locales
    }
}

impl Default for FluentUnitEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleUnitEngine for FluentUnitEngine {
    fn open(&self, locale: &Locale, style: UnitStyle) -> Option<Box<dyn EngineHandle>> {
        let key = self.data.bundle_key(locale)?;
        Some(Box::new(FluentHandle {
            data: Arc::clone(&self.data),
            key,
            region: locale.region().map(str::to_string),
            style,
            numbers: DecimalRenderer::new(locale),
        }))
    }
}

struct EngineData {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
}

impl EngineData {
    fn load() -> Self {
        let mut bundles = HashMap::new();
        for file in Resources::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                warn!(filename, "skipping translation resource with invalid locale name");
                continue;
            };
            let Some(content) = Resources::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    warn!(filename, ?errors, "translation resource parsed with errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                warn!(filename, ?errors, "translation resource has overriding messages");
            }
            bundles.insert(locale, bundle);
        }
        EngineData { bundles }
    }

    /// Negotiate the bundle serving a locale: exact identifier, then the
    /// bare language, then English.
    fn bundle_key(&self, locale: &Locale) -> Option<LanguageIdentifier> {
        let id = locale.id();
        if self.bundles.contains_key(id) {
            return Some(id.clone());
        }
        let language_only = LanguageIdentifier::from_parts(id.language, None, None, &[]);
        if self.bundles.contains_key(&language_only) {
            return Some(language_only);
        }
        let english = langid!("en");
        self.bundles.contains_key(&english).then_some(english)
    }
}

struct FluentHandle {
    data: Arc<EngineData>,
    key: LanguageIdentifier,
    region: Option<String>,
    style: UnitStyle,
    numbers: DecimalRenderer,
}

impl FluentHandle {
    /// Attribute lookup order for compound value+unit patterns. Medium
    /// maps to the abbreviated form, Short to the narrow one, falling
    /// back to abbreviated where a table carries no narrow column.
    fn pattern_attrs(&self) -> &'static [&'static str] {
        match self.style {
            UnitStyle::Long => &["long"],
            UnitStyle::Medium => &["short"],
            UnitStyle::Short => &["narrow", "short"],
        }
    }

    fn name_attrs(&self) -> &'static [&'static str] {
        match self.style {
            UnitStyle::Long => &["name"],
            UnitStyle::Medium => &["name-short"],
            UnitStyle::Short => &["name-narrow", "name-short"],
        }
    }

    fn render_number(&self, value: f64) -> String {
        use mensura_core::NumberRenderer;
        self.numbers.render(value).unwrap_or_else(|| value.to_string())
    }

    /// Resolve and format one message attribute. A missing message,
    /// missing attribute or formatting error is a lookup miss.
    fn format(&self, message_id: &str, attrs: &[&str], args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.data.bundles.get(&self.key)?;
        let message = bundle.get_message(message_id)?;
        let pattern = attrs
            .iter()
            .find_map(|attr| message.get_attribute(attr))
            .map(|attr| attr.value())?;
        let mut errors = vec![];
        let formatted = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            debug!(message_id, ?errors, "fluent pattern failed to format");
            return None;
        }
        Some(formatted.into_owned())
    }

    /// Apply locale-preferred substitution and natural-scale rescaling,
    /// as permitted by the options.
    fn localized_unit(
        &self,
        unit: &'static Unit,
        options: UnitOptions,
        value: f64,
    ) -> (&'static Unit, f64) {
        let mut current = unit;
        let mut value = value;

        if !options.contains(UnitOptions::PROVIDED_UNIT) {
            if let Some(preferred) = current
                .canonical
                .and_then(|id| prefer::preferred_unit(id, self.region.as_deref()))
            {
                if let Some(target) = UNITS.by_id(preferred) {
                    if let Ok(converted) = current.convert_to(value, target) {
                        current = target;
                        value = converted;
                    }
                }
            }
        }

        if options.contains(UnitOptions::NATURAL_SCALE) {
            if let Some((scaled_unit, scaled_value)) = prefer::natural_scale(current, value) {
                current = scaled_unit;
                value = scaled_value;
            }
        }

        (current, value)
    }
}

impl EngineHandle for FluentHandle {
    fn unit_name(&self, unit: UnitId) -> Option<String> {
        self.format(unit.name(), self.name_attrs(), None)
    }

    fn value_unit(&self, unit: UnitId, options: UnitOptions, value: f64) -> Option<String> {
        let catalog_unit = UNITS.by_id(unit)?;
        let (unit, value) = self.localized_unit(catalog_unit, options, value);

        let rendered = self.render_number(value);
        if options.contains(UnitOptions::TEMPERATURE_WITHOUT_UNIT)
            && unit.category == Category::Temperature
        {
            return Some(format!("{rendered}°"));
        }

        let id = unit.canonical?;
        let mut args = FluentArgs::new();
        args.set("value", FluentValue::from(rendered));
        args.set("count", FluentValue::from(value));
        self.format(id.name(), self.pattern_attrs(), Some(&args))
    }
}
