use acidbase_core::models::config::{EvaluationConfig, RespiratoryDuration};
use acidbase_core::models::interpretation::{
    AcidBaseStatus, Compensation, CompensationAnalysis, Disorder, Interpretation, PrimaryDisorder,
};
use acidbase_core::models::lab::LabValues;
use acidbase_core::reference::{HCO3, PACO2_MMHG, PH};

use super::compensation;
use crate::Evaluator;

/// Classifies pH, the primary disorder, and the degree of compensation.
/// Requires pH, PaCO₂ and HCO₃⁻; all-or-nothing.
pub struct AcidBase;

impl Evaluator for AcidBase {
    type Output = Interpretation;

    fn id(&self) -> &str {
        "acid_base"
    }

    fn name(&self) -> &str {
        "Acid-Base Classifier"
    }

    fn evaluate(&self, labs: &LabValues, config: &EvaluationConfig) -> Option<Interpretation> {
        Some(interpret(
            labs.ph?,
            labs.paco2?,
            labs.hco3?,
            config.respiratory_duration,
        ))
    }
}

pub fn interpret(
    ph: f64,
    paco2: f64,
    hco3: f64,
    duration: RespiratoryDuration,
) -> Interpretation {
    let acid_base_status = acid_base_status(ph);
    let primary_disorder = primary_disorder(acid_base_status, paco2, hco3);
    let compensation = compensation_status(primary_disorder, ph, paco2, hco3);
    let compensation_analysis = primary_disorder
        .single()
        .map(|disorder| compensation::analyze(disorder, paco2, hco3, duration));
    let summary = summary(primary_disorder, compensation, compensation_analysis.as_ref());

    Interpretation {
        acid_base_status,
        primary_disorder,
        compensation,
        compensation_analysis,
        summary,
    }
}

/// 7.35 and 7.45 themselves are normal.
pub fn acid_base_status(ph: f64) -> AcidBaseStatus {
    if ph < PH.min {
        AcidBaseStatus::Acidosis
    } else if ph > PH.max {
        AcidBaseStatus::Alkalosis
    } else {
        AcidBaseStatus::Normal
    }
}

pub fn primary_disorder(status: AcidBaseStatus, paco2: f64, hco3: f64) -> PrimaryDisorder {
    match status {
        AcidBaseStatus::Acidosis => {
            if paco2 > PACO2_MMHG.max {
                PrimaryDisorder::Single(Disorder::RespiratoryAcidosis)
            } else if hco3 < HCO3.min {
                PrimaryDisorder::Single(Disorder::MetabolicAcidosis)
            } else {
                PrimaryDisorder::Mixed
            }
        }
        AcidBaseStatus::Alkalosis => {
            if paco2 < PACO2_MMHG.min {
                PrimaryDisorder::Single(Disorder::RespiratoryAlkalosis)
            } else if hco3 > HCO3.max {
                PrimaryDisorder::Single(Disorder::MetabolicAlkalosis)
            } else {
                PrimaryDisorder::Mixed
            }
        }
        // Normal pH with an abnormal parameter: PaCO₂ deviations win ties.
        AcidBaseStatus::Normal => {
            if paco2 > PACO2_MMHG.max {
                PrimaryDisorder::Single(Disorder::RespiratoryAcidosis)
            } else if paco2 < PACO2_MMHG.min {
                PrimaryDisorder::Single(Disorder::RespiratoryAlkalosis)
            } else if hco3 < HCO3.min {
                PrimaryDisorder::Single(Disorder::MetabolicAcidosis)
            } else if hco3 > HCO3.max {
                PrimaryDisorder::Single(Disorder::MetabolicAlkalosis)
            } else {
                PrimaryDisorder::Normal
            }
        }
    }
}

/// Whether the secondary parameter has moved in the compensating
/// direction, graded by whether pH made it back into range.
pub fn compensation_status(
    disorder: PrimaryDisorder,
    ph: f64,
    paco2: f64,
    hco3: f64,
) -> Compensation {
    let Some(disorder) = disorder.single() else {
        return Compensation::Uncompensated;
    };

    let compensating = match disorder {
        Disorder::MetabolicAcidosis => paco2 < PACO2_MMHG.min,
        Disorder::MetabolicAlkalosis => paco2 > PACO2_MMHG.max,
        Disorder::RespiratoryAcidosis => hco3 > HCO3.max,
        Disorder::RespiratoryAlkalosis => hco3 < HCO3.min,
    };

    if !compensating {
        Compensation::Uncompensated
    } else if PH.contains(ph) {
        Compensation::FullyCompensated
    } else {
        Compensation::PartiallyCompensated
    }
}

pub fn summary(
    disorder: PrimaryDisorder,
    compensation: Compensation,
    analysis: Option<&CompensationAnalysis>,
) -> String {
    let mut summary = match disorder {
        PrimaryDisorder::Single(disorder) => format!(
            "{compensation} {} {}.",
            disorder.system(),
            disorder.direction()
        ),
        PrimaryDisorder::Mixed => "Mixed acid-base disorder.".to_string(),
        PrimaryDisorder::Normal => "Normal ABG.".to_string(),
    };

    if let Some(analysis) = analysis
        && !analysis.verdict.is_appropriate()
    {
        summary.push(' ');
        summary.push_str(analysis.verdict.sentence());
    }

    summary
}
