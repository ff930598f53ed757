use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Unit the user entered partial pressures (PaCO₂, PaO₂) in.
///
/// The engine always computes in mmHg; kPa inputs are converted when the
/// lab form is parsed, and the unit is otherwise only used for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "mmHg")]
    MmHg,
    #[serde(rename = "kPa")]
    KPa,
}

impl PressureUnit {
    pub const MMHG_PER_KPA: f64 = 7.50062;

    pub fn label(self) -> &'static str {
        match self {
            Self::MmHg => "mmHg",
            Self::KPa => "kPa",
        }
    }

    /// Convert a value expressed in this unit to mmHg.
    pub fn to_mmhg(self, value: f64) -> f64 {
        match self {
            Self::MmHg => value,
            Self::KPa => value * Self::MMHG_PER_KPA,
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PressureUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mmhg" => Ok(Self::MmHg),
            "kpa" => Ok(Self::KPa),
            _ => Err(CoreError::UnknownPressureUnit(s.to_string())),
        }
    }
}

/// Whether a respiratory disorder is acute or chronic. Selects the
/// expected-HCO₃⁻ formula; never inferred from the lab values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RespiratoryDuration {
    #[default]
    Acute,
    Chronic,
}

impl fmt::Display for RespiratoryDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acute => f.write_str("Acute"),
            Self::Chronic => f.write_str("Chronic"),
        }
    }
}

impl FromStr for RespiratoryDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acute" => Ok(Self::Acute),
            "chronic" => Ok(Self::Chronic),
            _ => Err(CoreError::UnknownDuration(s.to_string())),
        }
    }
}

/// Settings passed explicitly into every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationConfig {
    pub respiratory_duration: RespiratoryDuration,
    /// Barometric pressure in mmHg, used for the alveolar gas equation.
    pub barometric_pressure: u16,
    pub pressure_unit: PressureUnit,
}

impl EvaluationConfig {
    pub const DEFAULT_BAROMETRIC_PRESSURE: u16 = 760;
    pub const BAROMETRIC_PRESSURE_RANGE: RangeInclusive<u16> = 500..=800;

    pub fn new(
        respiratory_duration: RespiratoryDuration,
        barometric_pressure: u16,
        pressure_unit: PressureUnit,
    ) -> Result<Self, CoreError> {
        let config = Self {
            respiratory_duration,
            barometric_pressure,
            pressure_unit,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !Self::BAROMETRIC_PRESSURE_RANGE.contains(&self.barometric_pressure) {
            return Err(CoreError::BarometricPressureOutOfRange(
                self.barometric_pressure,
            ));
        }
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            respiratory_duration: RespiratoryDuration::default(),
            barometric_pressure: Self::DEFAULT_BAROMETRIC_PRESSURE,
            pressure_unit: PressureUnit::default(),
        }
    }
}
