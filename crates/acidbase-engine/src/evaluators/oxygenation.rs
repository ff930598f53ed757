use acidbase_core::models::config::EvaluationConfig;
use acidbase_core::models::lab::LabValues;
use acidbase_core::models::oxygenation::{OxygenationLevel, OxygenationResult};

use crate::{Evaluator, round_tenth};

/// Saturated water vapour pressure at 37 °C, mmHg.
pub const WATER_VAPOR_PRESSURE: f64 = 47.0;

/// Respiratory quotient used by the alveolar gas equation.
pub const RESPIRATORY_QUOTIENT: f64 = 0.8;

/// P/F ratio, severity tier and (with PaCO₂) the A-a gradient.
/// Requires PaO₂ and a positive FiO₂.
pub struct Oxygenation;

impl Evaluator for Oxygenation {
    type Output = OxygenationResult;

    fn id(&self) -> &str {
        "oxygenation"
    }

    fn name(&self) -> &str {
        "Oxygenation Evaluator"
    }

    fn evaluate(&self, labs: &LabValues, config: &EvaluationConfig) -> Option<OxygenationResult> {
        let fio2 = labs.fio2.filter(|f| *f > 0.0)?;
        Some(assess(labs.pao2?, fio2, labs.paco2, config.barometric_pressure))
    }
}

pub fn assess(
    pao2: f64,
    fio2: f64,
    paco2: Option<f64>,
    barometric_pressure: u16,
) -> OxygenationResult {
    let ratio = pao2 / fio2;
    // Tiered on the whole number that is printed.
    let level = oxygenation_level(ratio.round());
    let aa_gradient = paco2.map(|paco2| {
        round_tenth(alveolar_po2(fio2, f64::from(barometric_pressure), paco2) - pao2)
    });

    OxygenationResult {
        ratio,
        level,
        aa_gradient,
        interpretation: interpretation(ratio, level),
    }
}

pub fn oxygenation_level(ratio: f64) -> OxygenationLevel {
    if ratio >= 300.0 {
        OxygenationLevel::Normal
    } else if ratio >= 200.0 {
        OxygenationLevel::Mild
    } else if ratio >= 100.0 {
        OxygenationLevel::Moderate
    } else {
        OxygenationLevel::Severe
    }
}

/// Ideal alveolar PO₂: `FiO₂ × (Pb − PH₂O) − PaCO₂ / RQ`.
pub fn alveolar_po2(fio2: f64, barometric_pressure: f64, paco2: f64) -> f64 {
    fio2 * (barometric_pressure - WATER_VAPOR_PRESSURE) - paco2 / RESPIRATORY_QUOTIENT
}

fn interpretation(ratio: f64, level: OxygenationLevel) -> String {
    match level {
        OxygenationLevel::Normal => {
            format!("P/F ratio of {ratio:.0} indicates normal oxygenation.")
        }
        OxygenationLevel::Mild => {
            format!("P/F ratio of {ratio:.0} indicates mild impairment of oxygenation (200-300).")
        }
        OxygenationLevel::Moderate => {
            format!("P/F ratio of {ratio:.0} indicates moderate impairment of oxygenation (100-200).")
        }
        OxygenationLevel::Severe => {
            format!("P/F ratio of {ratio:.0} indicates severe impairment of oxygenation (< 100).")
        }
    }
}
