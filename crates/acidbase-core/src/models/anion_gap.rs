use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnionGapStatus {
    Normal,
    Elevated,
    Low,
}

impl fmt::Display for AnionGapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Elevated => f.write_str("Elevated"),
            Self::Low => f.write_str("Low"),
        }
    }
}

/// `Na⁺ - (Cl⁻ + HCO₃⁻)`, in mEq/L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnionGapResult {
    /// Rounded to one decimal.
    pub value: f64,
    pub status: AnionGapStatus,
    pub interpretation: String,
}

impl AnionGapResult {
    /// One-line form used by the copy summary, e.g.
    /// `Anion Gap: 16.0 (Elevated). Suggests ...`.
    pub fn sentence(&self) -> String {
        format!(
            "Anion Gap: {:.1} ({}). {}",
            self.value, self.status, self.interpretation
        )
    }
}
