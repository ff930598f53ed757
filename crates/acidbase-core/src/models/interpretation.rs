use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Blood pH relative to the 7.35–7.45 reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcidBaseStatus {
    Normal,
    Acidosis,
    Alkalosis,
}

impl fmt::Display for AcidBaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Acidosis => f.write_str("Acidosis"),
            Self::Alkalosis => f.write_str("Alkalosis"),
        }
    }
}

/// The organ system driving a disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcidBaseSystem {
    Respiratory,
    Metabolic,
}

impl fmt::Display for AcidBaseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Respiratory => f.write_str("Respiratory"),
            Self::Metabolic => f.write_str("Metabolic"),
        }
    }
}

/// A single primary acid-base disorder. System and direction travel
/// together, so a disorder can never be "Respiratory Normal".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Disorder {
    RespiratoryAcidosis,
    RespiratoryAlkalosis,
    MetabolicAcidosis,
    MetabolicAlkalosis,
}

impl Disorder {
    pub fn system(self) -> AcidBaseSystem {
        match self {
            Self::RespiratoryAcidosis | Self::RespiratoryAlkalosis => AcidBaseSystem::Respiratory,
            Self::MetabolicAcidosis | Self::MetabolicAlkalosis => AcidBaseSystem::Metabolic,
        }
    }

    /// Always `Acidosis` or `Alkalosis`.
    pub fn direction(self) -> AcidBaseStatus {
        match self {
            Self::RespiratoryAcidosis | Self::MetabolicAcidosis => AcidBaseStatus::Acidosis,
            Self::RespiratoryAlkalosis | Self::MetabolicAlkalosis => AcidBaseStatus::Alkalosis,
        }
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.system(), self.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "disorder", rename_all = "snake_case")]
#[ts(export)]
pub enum PrimaryDisorder {
    Normal,
    Mixed,
    Single(Disorder),
}

impl PrimaryDisorder {
    pub fn single(self) -> Option<Disorder> {
        match self {
            Self::Single(disorder) => Some(disorder),
            Self::Normal | Self::Mixed => None,
        }
    }
}

impl fmt::Display for PrimaryDisorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Mixed => f.write_str("Mixed"),
            Self::Single(disorder) => disorder.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Compensation {
    Uncompensated,
    PartiallyCompensated,
    FullyCompensated,
}

impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncompensated => f.write_str("Uncompensated"),
            Self::PartiallyCompensated => f.write_str("Partially Compensated"),
            Self::FullyCompensated => f.write_str("Fully Compensated"),
        }
    }
}

/// The value expected to move when the body compensates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SecondaryParameter {
    Paco2,
    Hco3,
}

impl SecondaryParameter {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paco2 => "PaCO₂",
            Self::Hco3 => "HCO₃⁻",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Paco2 => "mmHg",
            Self::Hco3 => "mEq/L",
        }
    }
}

/// Inclusive expected range for the secondary parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpectedRange {
    pub low: f64,
    pub high: f64,
}

impl ExpectedRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl fmt::Display for ExpectedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} - {:.1}", self.low, self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompensationVerdict {
    Appropriate,
    CoexistingRespiratoryAcidosis,
    CoexistingRespiratoryAlkalosis,
    CoexistingMetabolicAcidosis,
    CoexistingMetabolicAlkalosis,
}

impl CompensationVerdict {
    pub fn is_appropriate(self) -> bool {
        self == Self::Appropriate
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Self::Appropriate => "Compensation is appropriate.",
            Self::CoexistingRespiratoryAcidosis => "Suggests a co-existing respiratory acidosis.",
            Self::CoexistingRespiratoryAlkalosis => "Suggests a co-existing respiratory alkalosis.",
            Self::CoexistingMetabolicAcidosis => "Suggests a co-existing metabolic acidosis.",
            Self::CoexistingMetabolicAlkalosis => "Suggests a co-existing metabolic alkalosis.",
        }
    }
}

/// Expected versus actual secondary response for a single disorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompensationAnalysis {
    pub title: String,
    pub parameter: SecondaryParameter,
    pub expected: ExpectedRange,
    pub actual: f64,
    pub verdict: CompensationVerdict,
}

impl CompensationAnalysis {
    /// e.g. `Winter's Formula: expected PaCO₂ 34.0 - 38.0 mmHg, actual 40.0 mmHg. Suggests ...`
    pub fn sentence(&self) -> String {
        format!(
            "{}: expected {} {} {}, actual {:.1} {}. {}",
            self.title,
            self.parameter.label(),
            self.expected,
            self.parameter.unit(),
            self.actual,
            self.parameter.unit(),
            self.verdict.sentence(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub acid_base_status: AcidBaseStatus,
    pub primary_disorder: PrimaryDisorder,
    pub compensation: Compensation,
    /// Only set when `primary_disorder` is a single disorder.
    pub compensation_analysis: Option<CompensationAnalysis>,
    pub summary: String,
}
