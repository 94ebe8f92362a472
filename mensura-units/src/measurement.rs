//! Measurement type - a value with an associated unit

use std::fmt;

use serde::{Deserialize, Serialize};

use mensura_core::MeasureUnit;

use crate::{ConversionError, Unit};

/// A physical measurement: a numeric value paired with a unit.
///
/// Immutable; generic over any type carrying the `MeasureUnit`
/// capabilities, so catalog units and caller-defined custom units format
/// through the same machinery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U> {
    value: f64,
    unit: U,
}

impl<U: MeasureUnit> Measurement<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Measurement { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }
}

impl Measurement<Unit> {
    /// Convert to another catalog unit, keeping the value in step.
    pub fn converted_to(&self, target: &Unit) -> Result<Measurement<Unit>, ConversionError> {
        let value = self.unit.convert_to(self.value, target)?;
        Ok(Measurement::new(value, target.clone()))
    }
}

impl<U: MeasureUnit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
