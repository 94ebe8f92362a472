//! Formatting option flags

use bitflags::bitflags;

bitflags! {
    /// Independent, combinable switches that steer how the locale engine
    /// treats a measurement.
    ///
    /// With the empty set, the engine localizes according to the
    /// preferences of the locale: a measurement in kilometers is
    /// converted and shown in miles for a US locale. `PROVIDED_UNIT`
    /// suppresses that substitution and keeps the caller's unit;
    /// `NATURAL_SCALE` lets the engine rescale to a unit that suits the
    /// magnitude (0.5 km becomes 500 m); `TEMPERATURE_WITHOUT_UNIT`
    /// renders temperatures as a bare number and degree sign.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct UnitOptions: u8 {
        const PROVIDED_UNIT = 1 << 0;
        const NATURAL_SCALE = 1 << 1;
        const TEMPERATURE_WITHOUT_UNIT = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(UnitOptions::default().is_empty());
    }

    #[test]
    fn test_flags_combine() {
        let opts = UnitOptions::PROVIDED_UNIT | UnitOptions::NATURAL_SCALE;
        assert!(opts.contains(UnitOptions::PROVIDED_UNIT));
        assert!(!opts.contains(UnitOptions::TEMPERATURE_WITHOUT_UNIT));
        assert_eq!(opts.bits(), 0b11);
    }

    #[test]
    fn test_unknown_bits_truncated() {
        let opts = UnitOptions::from_bits_truncate(0xFF);
        assert_eq!(opts, UnitOptions::all());
    }
}
