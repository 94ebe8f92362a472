//! Locale-preferred unit substitution and natural-scale selection

use mensura_core::UnitId;
use mensura_units::{Unit, UNITS};

/// The unit a region prefers over the given one, if any. `None` means
/// the provided unit is already what the locale expects.
pub(crate) fn preferred_unit(unit: UnitId, region: Option<&str>) -> Option<UnitId> {
    match region? {
        // US customary regions per CLDR measurement data
        "US" | "LR" | "MM" => us_customary_preference(unit),
        // Road distances and speeds stay imperial in the UK
        "GB" => british_preference(unit),
        _ => None,
    }
}

fn us_customary_preference(unit: UnitId) -> Option<UnitId> {
    use UnitId::*;
    Some(match unit {
        Kilometer => Mile,
        Meter => Foot,
        Centimeter | Millimeter => Inch,
        Celsius | Kelvin => Fahrenheit,
        KilometerPerHour | MeterPerSecond => MilePerHour,
        Kilogram => Pound,
        Gram => Ounce,
        Liter => Quart,
        Milliliter => FluidOunce,
        _ => return None,
    })
}

fn british_preference(unit: UnitId) -> Option<UnitId> {
    use UnitId::*;
    Some(match unit {
        Kilometer => Mile,
        KilometerPerHour | MeterPerSecond => MilePerHour,
        _ => return None,
    })
}

/// Rescale a measurement to the unit in its category and system whose
/// magnitude suits the value best: the largest unit that keeps the
/// converted value at or above one, or the smallest available when the
/// value is below all of them.
///
/// Affine units (temperature scales) never rescale, and a zero or
/// non-finite value has no natural magnitude.
pub(crate) fn natural_scale(unit: &Unit, value: f64) -> Option<(&'static Unit, f64)> {
    if !unit.is_proportional() || value == 0.0 || !value.is_finite() {
        return None;
    }

    let mut candidates: Vec<&'static Unit> = UNITS
        .by_category(unit.category)
        .into_iter()
        .filter(|u| u.system == unit.system && u.is_proportional())
        .collect();
    candidates.sort_by(|a, b| a.to_base_factor.total_cmp(&b.to_base_factor));

    let base = unit.to_base(value).abs();
    let mut chosen = *candidates.first()?;
    for candidate in candidates.iter().copied() {
        if candidate.to_base_factor <= base {
            chosen = candidate;
        } else {
            break;
        }
    }

    if chosen.symbol == unit.symbol {
        return None;
    }
    let scaled = unit.convert_to(value, chosen).ok()?;
    Some((chosen, scaled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_prefers_miles() {
        assert_eq!(preferred_unit(UnitId::Kilometer, Some("US")), Some(UnitId::Mile));
        assert_eq!(preferred_unit(UnitId::Celsius, Some("US")), Some(UnitId::Fahrenheit));
    }

    #[test]
    fn test_britain_keeps_metric_mass() {
        assert_eq!(preferred_unit(UnitId::Kilometer, Some("GB")), Some(UnitId::Mile));
        assert_eq!(preferred_unit(UnitId::Kilogram, Some("GB")), None);
    }

    #[test]
    fn test_no_region_no_substitution() {
        assert_eq!(preferred_unit(UnitId::Kilometer, None), None);
    }

    #[test]
    fn test_natural_scale_shrinks_small_lengths() {
        let km = UNITS.get("km").unwrap();
        let (unit, value) = natural_scale(km, 0.5).unwrap();
        assert_eq!(unit.symbol, "m");
        assert_eq!(value, 500.0);
    }

    #[test]
    fn test_natural_scale_grows_large_lengths() {
        let m = UNITS.get("m").unwrap();
        let (unit, value) = natural_scale(m, 5000.0).unwrap();
        assert_eq!(unit.symbol, "km");
        assert_eq!(value, 5.0);
    }

    #[test]
    fn test_natural_scale_keeps_fitting_unit() {
        let km = UNITS.get("km").unwrap();
        assert!(natural_scale(km, 5.2).is_none());
    }

    #[test]
    fn test_natural_scale_skips_temperatures() {
        let celsius = UNITS.get("°C").unwrap();
        assert!(natural_scale(celsius, 0.5).is_none());
    }

    #[test]
    fn test_natural_scale_scales_data_sizes() {
        let byte = UNITS.get("B").unwrap();
        let (unit, value) = natural_scale(byte, 2_500_000.0).unwrap();
        assert_eq!(unit.symbol, "MB");
        assert_eq!(value, 2.5);
    }
}
