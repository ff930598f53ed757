use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// P/F ratio severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OxygenationLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for OxygenationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Mild => f.write_str("Mild"),
            Self::Moderate => f.write_str("Moderate"),
            Self::Severe => f.write_str("Severe"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OxygenationResult {
    /// PaO₂ / FiO₂.
    pub ratio: f64,
    pub level: OxygenationLevel,
    /// Alveolar-arterial gradient in mmHg, rounded to one decimal.
    /// Only present when PaCO₂ was provided.
    pub aa_gradient: Option<f64>,
    pub interpretation: String,
}

impl OxygenationResult {
    /// Upper reference limit for the A-a gradient on room air.
    pub const AA_GRADIENT_UPPER: f64 = 15.0;

    pub fn aa_gradient_sentence(&self) -> Option<String> {
        self.aa_gradient.map(|gradient| {
            if gradient > Self::AA_GRADIENT_UPPER {
                format!(
                    "A-a gradient is {gradient:.1} mmHg (elevated), suggesting V/Q mismatch, shunt, or diffusion impairment."
                )
            } else {
                format!("A-a gradient is {gradient:.1} mmHg (within normal limits).")
            }
        })
    }
}
