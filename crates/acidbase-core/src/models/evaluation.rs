use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::anion_gap::AnionGapResult;
use super::interpretation::Interpretation;
use super::oxygenation::OxygenationResult;

/// Everything the engine could compute from one set of lab values. Each
/// part is independent; missing inputs leave the matching part `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub interpretation: Option<Interpretation>,
    pub oxygenation: Option<OxygenationResult>,
    pub anion_gap: Option<AnionGapResult>,
}

impl Evaluation {
    pub fn is_empty(&self) -> bool {
        self.interpretation.is_none() && self.oxygenation.is_none() && self.anion_gap.is_none()
    }
}
