//! acidbase-engine
//!
//! Blood-gas interpretation rules. Pure functions with no I/O or state.
//! Each evaluator reads the lab values it needs and returns `None` when
//! any of them is missing; evaluators never depend on each other.

pub mod evaluators;
pub mod legacy;

use acidbase_core::models::config::EvaluationConfig;
use acidbase_core::models::evaluation::Evaluation;
use acidbase_core::models::lab::{LabForm, LabValues};

use evaluators::acid_base::AcidBase;
use evaluators::anion_gap::AnionGap;
use evaluators::oxygenation::Oxygenation;

/// Trait implemented by each independent evaluator.
pub trait Evaluator: Send + Sync {
    type Output;

    /// Stable identifier (e.g., "acid_base", "anion_gap").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Run the evaluator. Returns `None` when a required input is absent.
    fn evaluate(&self, labs: &LabValues, config: &EvaluationConfig) -> Option<Self::Output>;
}

/// Run every evaluator over `labs`.
pub fn evaluate(labs: &LabValues, config: &EvaluationConfig) -> Evaluation {
    let evaluation = Evaluation {
        interpretation: AcidBase.evaluate(labs, config),
        oxygenation: Oxygenation.evaluate(labs, config),
        anion_gap: AnionGap.evaluate(labs, config),
    };

    tracing::debug!(
        acid_base = evaluation.interpretation.is_some(),
        oxygenation = evaluation.oxygenation.is_some(),
        anion_gap = evaluation.anion_gap.is_some(),
        "evaluated lab values"
    );

    evaluation
}

/// Parse `form` in the configured pressure unit, then [`evaluate`].
pub fn evaluate_form(form: &LabForm, config: &EvaluationConfig) -> Evaluation {
    evaluate(&form.parse(config.pressure_unit), config)
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
