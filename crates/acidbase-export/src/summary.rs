use acidbase_core::models::evaluation::Evaluation;

/// Everything worth pasting into a clinical note, as one line: the
/// acid-base summary, the oxygenation sentence, the anion gap, and the
/// A-a gradient. Absent results are skipped; returns an empty string
/// when nothing could be evaluated.
pub fn copy_summary(evaluation: &Evaluation) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(interpretation) = &evaluation.interpretation {
        parts.push(interpretation.summary.clone());
    }
    if let Some(oxygenation) = &evaluation.oxygenation {
        parts.push(oxygenation.interpretation.clone());
    }
    if let Some(anion_gap) = &evaluation.anion_gap {
        parts.push(anion_gap.sentence());
    }
    if let Some(sentence) = evaluation
        .oxygenation
        .as_ref()
        .and_then(|o| o.aa_gradient_sentence())
    {
        parts.push(sentence);
    }

    parts.join(" ")
}

/// Bulleted interpretation lines shown under the report table.
pub fn interpretation_lines(evaluation: &Evaluation) -> Vec<String> {
    let interpretation = evaluation.interpretation.as_ref();

    [
        interpretation.map(|i| i.summary.clone()),
        interpretation
            .and_then(|i| i.compensation_analysis.as_ref())
            .map(|a| a.sentence()),
        evaluation.oxygenation.as_ref().map(|o| o.interpretation.clone()),
        evaluation.anion_gap.as_ref().map(|a| a.interpretation.clone()),
    ]
    .into_iter()
    .flatten()
    .collect()
}
