//! Tabular report rows: value as entered, H/L flag, reference interval.

use serde::Serialize;

use acidbase_core::models::anion_gap::AnionGapResult;
use acidbase_core::models::config::PressureUnit;
use acidbase_core::models::oxygenation::OxygenationResult;
use acidbase_core::models::report::Report;
use acidbase_core::reference::{Analyte, Flag, reference_range};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    /// Display value, or `N/A`.
    pub value: String,
    pub flag: Option<Flag>,
    pub range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub rows: Vec<ReportRow>,
}

/// Build the three report sections. Lab values are shown and flagged in
/// the unit they were entered in.
pub fn report_sections(report: &Report) -> Vec<ReportSection> {
    let unit = report.config.pressure_unit;
    let form = &report.form;
    // Parsing as mmHg leaves every value exactly as entered.
    let entered = form.parse(PressureUnit::MmHg);
    let oxygenation = report.evaluation.oxygenation.as_ref();
    let anion_gap = report.evaluation.anion_gap.as_ref();

    let lab_row = |label: String, raw: &str, value: Option<f64>, analyte: Analyte| {
        let range = reference_range(analyte, unit);
        ReportRow {
            label,
            value: display_raw(raw),
            flag: range.flag(value),
            range: range.to_string(),
        }
    };

    vec![
        ReportSection {
            title: "ACID-BASE STATUS",
            rows: vec![
                lab_row("pH".to_string(), &form.ph, entered.ph, Analyte::Ph),
                lab_row(
                    format!("PaCO₂ ({unit})"),
                    &form.paco2,
                    entered.paco2,
                    Analyte::Paco2,
                ),
                lab_row(
                    "HCO₃⁻ (mEq/L)".to_string(),
                    &form.hco3,
                    entered.hco3,
                    Analyte::Hco3,
                ),
            ],
        },
        ReportSection {
            title: "OXYGENATION STATUS",
            rows: vec![
                lab_row(
                    format!("PaO₂ ({unit})"),
                    &form.pao2,
                    entered.pao2,
                    Analyte::Pao2,
                ),
                ReportRow {
                    label: "P/F Ratio".to_string(),
                    value: oxygenation
                        .map(|o| format!("{:.0}", o.ratio))
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    flag: None,
                    range: "> 300".to_string(),
                },
                aa_gradient_row(oxygenation),
            ],
        },
        ReportSection {
            title: "ELECTROLYTES & CALCULATIONS",
            rows: vec![
                anion_gap_row(anion_gap),
                lab_row("Na⁺ (mEq/L)".to_string(), &form.na, entered.na, Analyte::Sodium),
                lab_row(
                    "Cl⁻ (mEq/L)".to_string(),
                    &form.cl,
                    entered.cl,
                    Analyte::Chloride,
                ),
            ],
        },
    ]
}

fn aa_gradient_row(oxygenation: Option<&OxygenationResult>) -> ReportRow {
    let gradient = oxygenation.and_then(|o| o.aa_gradient);
    ReportRow {
        label: "A-a Gradient (mmHg)".to_string(),
        value: gradient
            .map(|g| format!("{g:.1}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        flag: gradient
            .filter(|g| *g > OxygenationResult::AA_GRADIENT_UPPER)
            .map(|_| Flag::High),
        range: format!("< {}", OxygenationResult::AA_GRADIENT_UPPER),
    }
}

fn anion_gap_row(anion_gap: Option<&AnionGapResult>) -> ReportRow {
    // Not a pressure, so the unit is irrelevant.
    let range = reference_range(Analyte::AnionGap, PressureUnit::MmHg);
    let value = anion_gap.map(|a| a.value);
    ReportRow {
        label: "Anion Gap (mEq/L)".to_string(),
        value: value
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        flag: range.flag(value),
        range: range.to_string(),
    }
}

fn display_raw(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        trimmed.to_string()
    }
}

