use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::config::EvaluationConfig;
use super::evaluation::Evaluation;
use super::lab::LabForm;
use super::patient::PatientDetails;

/// A printable ABG report: the inputs as entered, the settings used, and
/// the engine's output.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub generated_at: jiff::Timestamp,
    pub patient: PatientDetails,
    /// Entries as typed, so values print in the unit they were entered in.
    pub form: LabForm,
    pub config: EvaluationConfig,
    pub evaluation: Evaluation,
}

impl Report {
    pub fn new(
        patient: PatientDetails,
        form: LabForm,
        config: EvaluationConfig,
        evaluation: Evaluation,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: jiff::Timestamp::now(),
            patient,
            form,
            config,
            evaluation,
        }
    }
}
