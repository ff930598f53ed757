use serde::{Deserialize, Serialize};

/// Styling for the DOCX report. Missing fields in a config file fall
/// back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table rows.
    pub body_font: String,

    /// Font for the title and section headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub heading1_size: usize,

    /// Section heading font size in points.
    pub heading2_size: usize,

    pub heading3_size: usize,

    /// Hex RGB colour for H/L flags, without `#`.
    pub flag_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            heading3_size: 11,
            flag_color: "C0392B".to_string(),
        }
    }
}
