//! Expected secondary response for a single primary disorder.
//!
//! Metabolic disorders predict PaCO₂ from HCO₃⁻; respiratory disorders
//! predict HCO₃⁻ from PaCO₂, with separate acute and chronic formulas.

use acidbase_core::models::config::RespiratoryDuration;
use acidbase_core::models::interpretation::{
    CompensationAnalysis, CompensationVerdict, Disorder, ExpectedRange, SecondaryParameter,
};

use crate::round_tenth;

/// ± tolerance around the predicted PaCO₂ for metabolic disorders.
pub const PACO2_TOLERANCE: f64 = 2.0;

const NORMAL_PACO2: f64 = 40.0;
const NORMAL_HCO3: f64 = 24.0;

pub fn analyze(
    disorder: Disorder,
    paco2: f64,
    hco3: f64,
    duration: RespiratoryDuration,
) -> CompensationAnalysis {
    match disorder {
        Disorder::MetabolicAcidosis => {
            let expected = 1.5 * hco3 + 8.0;
            respiratory_response("Winter's Formula", expected, paco2)
        }
        Disorder::MetabolicAlkalosis => {
            let expected = 0.7 * hco3 + 21.0;
            respiratory_response("Expected PaCO₂ (Metabolic Alkalosis)", expected, paco2)
        }
        Disorder::RespiratoryAcidosis => {
            let rise = (paco2 - NORMAL_PACO2) / 10.0;
            let (title, expected) = match duration {
                RespiratoryDuration::Acute => {
                    let e = NORMAL_HCO3 + rise;
                    (
                        "Expected HCO₃⁻ (Acute Respiratory Acidosis)",
                        ExpectedRange {
                            low: e,
                            high: e + 2.0,
                        },
                    )
                }
                RespiratoryDuration::Chronic => {
                    let e = NORMAL_HCO3 + 3.5 * rise;
                    (
                        "Expected HCO₃⁻ (Chronic Respiratory Acidosis)",
                        ExpectedRange {
                            low: e,
                            high: e + 3.0,
                        },
                    )
                }
            };
            metabolic_response(title, expected, hco3)
        }
        Disorder::RespiratoryAlkalosis => {
            let fall = (NORMAL_PACO2 - paco2) / 10.0;
            let (title, expected) = match duration {
                RespiratoryDuration::Acute => {
                    let e = NORMAL_HCO3 - 2.0 * fall;
                    (
                        "Expected HCO₃⁻ (Acute Respiratory Alkalosis)",
                        ExpectedRange {
                            low: e - 2.0,
                            high: e,
                        },
                    )
                }
                RespiratoryDuration::Chronic => {
                    let e = NORMAL_HCO3 - 5.0 * fall;
                    (
                        "Expected HCO₃⁻ (Chronic Respiratory Alkalosis)",
                        ExpectedRange {
                            low: e - 3.0,
                            high: e,
                        },
                    )
                }
            };
            metabolic_response(title, expected, hco3)
        }
    }
}

fn respiratory_response(title: &str, expected: f64, paco2: f64) -> CompensationAnalysis {
    let range = displayed(ExpectedRange {
        low: expected - PACO2_TOLERANCE,
        high: expected + PACO2_TOLERANCE,
    });
    let verdict = if paco2 < range.low {
        CompensationVerdict::CoexistingRespiratoryAlkalosis
    } else if paco2 > range.high {
        CompensationVerdict::CoexistingRespiratoryAcidosis
    } else {
        CompensationVerdict::Appropriate
    };

    CompensationAnalysis {
        title: title.to_string(),
        parameter: SecondaryParameter::Paco2,
        expected: range,
        actual: paco2,
        verdict,
    }
}

fn metabolic_response(title: &str, range: ExpectedRange, hco3: f64) -> CompensationAnalysis {
    let range = displayed(range);
    let verdict = if hco3 < range.low {
        CompensationVerdict::CoexistingMetabolicAcidosis
    } else if hco3 > range.high {
        CompensationVerdict::CoexistingMetabolicAlkalosis
    } else {
        CompensationVerdict::Appropriate
    };

    CompensationAnalysis {
        title: title.to_string(),
        parameter: SecondaryParameter::Hco3,
        expected: range,
        actual: hco3,
        verdict,
    }
}

/// Range ends at the one-decimal precision they are printed with, so a value
/// shown on a bound compares as inside it.
fn displayed(range: ExpectedRange) -> ExpectedRange {
    ExpectedRange {
        low: round_tenth(range.low),
        high: round_tenth(range.high),
    }
}
