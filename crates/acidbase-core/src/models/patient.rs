use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-text patient metadata printed on the report. All fields optional;
/// an empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub mrn: String,
    #[serde(default)]
    pub hospital: String,
}

impl PatientDetails {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.age, &self.mrn, &self.hospital]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}
