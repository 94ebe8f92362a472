//! Ambient process locale

use unic_langid::langid;

use mensura_core::{CurrentLocaleProvider, Locale};

/// Resolves the current locale from the operating system, falling back
/// to `en-US` when the OS reports nothing usable.
pub struct SystemLocaleProvider;

impl CurrentLocaleProvider for SystemLocaleProvider {
    fn current(&self) -> Locale {
        sys_locale::get_locale()
            .and_then(|s| Locale::parse(&s).ok())
            .unwrap_or_else(|| Locale::new(langid!("en-US")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_always_yields_a_locale() {
        // System dependent; we only require that resolution never fails.
        let locale = SystemLocaleProvider.current();
        assert!(!locale.language().is_empty());
    }
}
