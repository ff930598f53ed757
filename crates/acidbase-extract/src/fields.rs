//! Parsing the extractor's reply and merging it into the form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use acidbase_core::models::lab::{LabField, LabForm};
use acidbase_core::models::patient::PatientDetails;

use crate::error::ExtractError;

/// Flat key/value map returned by an extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(Map<String, Value>);

impl ExtractedFields {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value for `key` as form text. Numbers are stringified; `null`
    /// and nested values count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(value_text)
    }

    /// Overwrite only the entries whose keys are present. Unknown keys are
    /// ignored and absent keys leave prior values untouched. Returns the
    /// number of entries applied.
    pub fn merge_into(&self, form: &mut LabForm, patient: &mut PatientDetails) -> usize {
        let mut applied = 0;
        for (key, value) in &self.0 {
            let Some(text) = value_text(value) else {
                continue;
            };

            if let Ok(field) = key.parse::<LabField>() {
                form.set(field, text);
                applied += 1;
                continue;
            }

            let slot = match key.as_str() {
                "name" => &mut patient.name,
                "age" => &mut patient.age,
                "mrn" => &mut patient.mrn,
                "hospital" => &mut patient.hospital,
                _ => {
                    debug!(key, "ignoring unknown extracted field");
                    continue;
                }
            };
            *slot = text;
            applied += 1;
        }
        applied
    }
}

impl From<Map<String, Value>> for ExtractedFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Parse a raw extractor reply. Markdown code fences around the JSON are
/// tolerated; anything other than a JSON object is a `ResponseParse` error.
pub fn parse_response(text: &str) -> Result<ExtractedFields, ExtractError> {
    let json = strip_code_fences(text);
    let value: Value =
        serde_json::from_str(json).map_err(|e| ExtractError::ResponseParse(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(ExtractedFields(map)),
        _ => Err(ExtractError::ResponseParse(
            "expected a flat JSON object".to_string(),
        )),
    }
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Info string, e.g. `json`.
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
