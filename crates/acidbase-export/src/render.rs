use serde::Serialize;
use tera::{Context, Tera};

use acidbase_core::models::report::Report;

use crate::error::ExportError;
use crate::rows::{ReportSection, report_sections};
use crate::summary::interpretation_lines;

/// Built-in report layout.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

pub const DEFAULT_HOSPITAL: &str = "Clinical Laboratory";

pub const DISCLAIMER: &str = "This is an automated analysis and is not a substitute for clinical \
judgment. All results must be correlated with the patient's clinical condition by a qualified \
healthcare professional.";

/// Template context for a report. Empty patient fields are already
/// replaced with `N/A`.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub id: String,
    pub generated_at: String,
    pub hospital: &'a str,
    pub patient_name: &'a str,
    pub mrn: &'a str,
    pub age: &'a str,
    pub respiratory_duration: String,
    pub barometric_pressure: u16,
    pub sections: Vec<ReportSection>,
    pub interpretation: Vec<String>,
    pub disclaimer: &'static str,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a Report) -> Self {
        let patient = &report.patient;
        let hospital = match patient.hospital.trim() {
            "" => DEFAULT_HOSPITAL,
            h => h,
        };

        Self {
            id: report.id.to_string(),
            generated_at: report
                .generated_at
                .strftime("%Y-%m-%d %H:%M UTC")
                .to_string(),
            hospital,
            patient_name: or_not_available(&patient.name),
            mrn: or_not_available(&patient.mrn),
            age: or_not_available(&patient.age),
            respiratory_duration: report.config.respiratory_duration.to_string(),
            barometric_pressure: report.config.barometric_pressure,
            sections: report_sections(report),
            interpretation: interpretation_lines(&report.evaluation),
            disclaimer: DISCLAIMER,
        }
    }
}

/// Render a Tera template against a report.
///
/// `template_name` decides autoescaping the way Tera always does: names
/// ending in `.html` or `.xml` are escaped, `.md` is not.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &Report,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportView::new(report))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::info!(report_id = %report.id, template = template_name, "rendered report");
    Ok(rendered)
}

/// Render with the built-in layout.
pub fn render_report(report: &Report) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, report)
}

fn or_not_available(value: &str) -> &str {
    match value.trim() {
        "" => "N/A",
        v => v,
    }
}
