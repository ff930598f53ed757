//! Threshold-based hypoxemia flag from earlier releases.
//!
//! Superseded by the P/F ratio evaluator in
//! [`evaluators::oxygenation`](crate::evaluators::oxygenation), which
//! [`evaluate`](crate::evaluate) uses. Not wired into any evaluation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypoxemiaFlag {
    Normal,
    Hypoxemia,
}

impl HypoxemiaFlag {
    /// Sentence that was appended to the acid-base summary.
    pub fn sentence(self) -> Option<&'static str> {
        match self {
            Self::Hypoxemia => Some("Hypoxemia is present."),
            Self::Normal => None,
        }
    }
}

/// `PaO₂ < 80` or `SaO₂ < 95` flags hypoxemia; absent values are ignored.
#[deprecated(note = "use the P/F ratio evaluator (`evaluators::oxygenation::Oxygenation`)")]
pub fn hypoxemia_flag(pao2: Option<f64>, sao2: Option<f64>) -> HypoxemiaFlag {
    let low_pao2 = pao2.is_some_and(|v| v < 80.0);
    let low_sao2 = sao2.is_some_and(|v| v < 95.0);
    if low_pao2 || low_sao2 {
        HypoxemiaFlag::Hypoxemia
    } else {
        HypoxemiaFlag::Normal
    }
}
