use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::config::PressureUnit;

/// Out-of-range marker printed next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Flag {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "L")]
    Low,
}

impl Flag {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::High => "H",
            Self::Low => "L",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Inclusive reference interval for an analyte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn flag(&self, value: Option<f64>) -> Option<Flag> {
        match value {
            Some(v) if v > self.max => Some(Flag::High),
            Some(v) if v < self.min => Some(Flag::Low),
            _ => None,
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

pub const PH: ReferenceRange = ReferenceRange::new(7.35, 7.45);
pub const PACO2_MMHG: ReferenceRange = ReferenceRange::new(35.0, 45.0);
pub const PACO2_KPA: ReferenceRange = ReferenceRange::new(4.7, 6.0);
pub const HCO3: ReferenceRange = ReferenceRange::new(22.0, 26.0);
pub const PAO2_MMHG: ReferenceRange = ReferenceRange::new(80.0, 100.0);
pub const PAO2_KPA: ReferenceRange = ReferenceRange::new(10.7, 13.3);
pub const SODIUM: ReferenceRange = ReferenceRange::new(135.0, 145.0);
pub const CHLORIDE: ReferenceRange = ReferenceRange::new(96.0, 106.0);
pub const ANION_GAP: ReferenceRange = ReferenceRange::new(4.0, 12.0);

/// Analytes that have a printed reference interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Analyte {
    Ph,
    Paco2,
    Hco3,
    Pao2,
    Sodium,
    Chloride,
    AnionGap,
}

/// Reference interval for `analyte`, with partial pressures in `unit`.
pub fn reference_range(analyte: Analyte, unit: PressureUnit) -> ReferenceRange {
    match (analyte, unit) {
        (Analyte::Ph, _) => PH,
        (Analyte::Paco2, PressureUnit::MmHg) => PACO2_MMHG,
        (Analyte::Paco2, PressureUnit::KPa) => PACO2_KPA,
        (Analyte::Hco3, _) => HCO3,
        (Analyte::Pao2, PressureUnit::MmHg) => PAO2_MMHG,
        (Analyte::Pao2, PressureUnit::KPa) => PAO2_KPA,
        (Analyte::Sodium, _) => SODIUM,
        (Analyte::Chloride, _) => CHLORIDE,
        (Analyte::AnionGap, _) => ANION_GAP,
    }
}
