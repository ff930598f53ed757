use acidbase_core::models::anion_gap::{AnionGapResult, AnionGapStatus};
use acidbase_core::models::config::EvaluationConfig;
use acidbase_core::models::lab::LabValues;
use acidbase_core::reference::ANION_GAP;

use crate::{Evaluator, round_tenth};

/// `Na⁺ - (Cl⁻ + HCO₃⁻)`. Requires all three.
pub struct AnionGap;

impl Evaluator for AnionGap {
    type Output = AnionGapResult;

    fn id(&self) -> &str {
        "anion_gap"
    }

    fn name(&self) -> &str {
        "Anion Gap Evaluator"
    }

    fn evaluate(&self, labs: &LabValues, _config: &EvaluationConfig) -> Option<AnionGapResult> {
        Some(assess(labs.na?, labs.cl?, labs.hco3?))
    }
}

/// The gap is rounded to one decimal before it is classified, so the status
/// always agrees with the reported value.
pub fn assess(na: f64, cl: f64, hco3: f64) -> AnionGapResult {
    let gap = round_tenth(na - (cl + hco3));
    let (status, interpretation) = if gap > ANION_GAP.max {
        (
            AnionGapStatus::Elevated,
            "Suggests high anion gap metabolic acidosis (e.g., DKA, lactic acidosis, uremia).",
        )
    } else if gap < ANION_GAP.min {
        (
            AnionGapStatus::Low,
            "May indicate hypoalbuminemia, hypercalcemia, or lab error.",
        )
    } else {
        (AnionGapStatus::Normal, "Normal anion gap.")
    };

    AnionGapResult {
        value: gap,
        status,
        interpretation: interpretation.to_string(),
    }
}
