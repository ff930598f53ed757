use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::config::PressureUnit;
use crate::error::CoreError;

/// One of the seven lab inputs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LabField {
    Ph,
    Paco2,
    Hco3,
    Pao2,
    Fio2,
    Na,
    Cl,
}

impl LabField {
    pub const ALL: [LabField; 7] = [
        Self::Ph,
        Self::Paco2,
        Self::Hco3,
        Self::Pao2,
        Self::Fio2,
        Self::Na,
        Self::Cl,
    ];

    /// Key used in forms and extraction replies (e.g. `"paco2"`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Ph => "ph",
            Self::Paco2 => "paco2",
            Self::Hco3 => "hco3",
            Self::Pao2 => "pao2",
            Self::Fio2 => "fio2",
            Self::Na => "na",
            Self::Cl => "cl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ph => "pH",
            Self::Paco2 => "PaCO₂",
            Self::Hco3 => "HCO₃⁻",
            Self::Pao2 => "PaO₂",
            Self::Fio2 => "FiO₂",
            Self::Na => "Na⁺",
            Self::Cl => "Cl⁻",
        }
    }

    /// Partial pressures follow the selected [`PressureUnit`].
    pub fn is_pressure(self) -> bool {
        matches!(self, Self::Paco2 | Self::Pao2)
    }

    fn accepts(self, value: f64) -> bool {
        match self {
            Self::Ph => value > 0.0 && value < 14.0,
            Self::Fio2 => value > 0.0 && value <= 1.0,
            _ => value > 0.0,
        }
    }

    fn bounds_hint(self) -> &'static str {
        match self {
            Self::Ph => "must be between 0 and 14",
            Self::Fio2 => "must be a fraction greater than 0 and at most 1",
            _ => "must be greater than 0",
        }
    }
}

impl fmt::Display for LabField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LabField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Parsed lab values. Partial pressures are always in mmHg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabValues {
    pub ph: Option<f64>,
    pub paco2: Option<f64>,
    pub hco3: Option<f64>,
    pub pao2: Option<f64>,
    pub fio2: Option<f64>,
    pub na: Option<f64>,
    pub cl: Option<f64>,
}

impl LabValues {
    pub fn get(&self, field: LabField) -> Option<f64> {
        match field {
            LabField::Ph => self.ph,
            LabField::Paco2 => self.paco2,
            LabField::Hco3 => self.hco3,
            LabField::Pao2 => self.pao2,
            LabField::Fio2 => self.fio2,
            LabField::Na => self.na,
            LabField::Cl => self.cl,
        }
    }

    fn slot(&mut self, field: LabField) -> &mut Option<f64> {
        match field {
            LabField::Ph => &mut self.ph,
            LabField::Paco2 => &mut self.paco2,
            LabField::Hco3 => &mut self.hco3,
            LabField::Pao2 => &mut self.pao2,
            LabField::Fio2 => &mut self.fio2,
            LabField::Na => &mut self.na,
            LabField::Cl => &mut self.cl,
        }
    }
}

/// Why a non-empty form entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    Unparseable,
    OutOfBounds,
}

/// A form entry that could not be used. The field is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldIssue {
    pub field: LabField,
    pub raw: String,
    pub kind: IssueKind,
    pub message: String,
}

/// Raw lab entries as typed by the user or merged from an extraction
/// reply. An empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabForm {
    #[serde(default)]
    pub ph: String,
    #[serde(default)]
    pub paco2: String,
    #[serde(default)]
    pub hco3: String,
    #[serde(default)]
    pub pao2: String,
    #[serde(default)]
    pub fio2: String,
    #[serde(default)]
    pub na: String,
    #[serde(default)]
    pub cl: String,
}

impl LabForm {
    pub fn get(&self, field: LabField) -> &str {
        match field {
            LabField::Ph => &self.ph,
            LabField::Paco2 => &self.paco2,
            LabField::Hco3 => &self.hco3,
            LabField::Pao2 => &self.pao2,
            LabField::Fio2 => &self.fio2,
            LabField::Na => &self.na,
            LabField::Cl => &self.cl,
        }
    }

    pub fn set(&mut self, field: LabField, value: impl Into<String>) {
        let slot = match field {
            LabField::Ph => &mut self.ph,
            LabField::Paco2 => &mut self.paco2,
            LabField::Hco3 => &mut self.hco3,
            LabField::Pao2 => &mut self.pao2,
            LabField::Fio2 => &mut self.fio2,
            LabField::Na => &mut self.na,
            LabField::Cl => &mut self.cl,
        };
        *slot = value.into();
    }

    /// Clear every entry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse every entry into [`LabValues`], converting partial pressures
    /// from `unit` to mmHg. Empty or invalid entries become `None`.
    pub fn parse(&self, unit: PressureUnit) -> LabValues {
        let mut values = LabValues::default();
        for field in LabField::ALL {
            if let Ok(Some(value)) = parse_entry(field, self.get(field)) {
                *values.slot(field) = Some(if field.is_pressure() {
                    unit.to_mmhg(value)
                } else {
                    value
                });
            }
        }
        values
    }

    /// Entries that are filled in but cannot be used.
    pub fn issues(&self) -> Vec<FieldIssue> {
        LabField::ALL
            .into_iter()
            .filter_map(|field| parse_entry(field, self.get(field)).err())
            .collect()
    }
}

fn parse_entry(field: LabField, raw: &str) -> Result<Option<f64>, FieldIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| FieldIssue {
        field,
        raw: raw.to_string(),
        kind: IssueKind::Unparseable,
        message: format!("{}: '{}' is not a number", field.label(), trimmed),
    })?;

    if !value.is_finite() || !field.accepts(value) {
        return Err(FieldIssue {
            field,
            raw: raw.to_string(),
            kind: IssueKind::OutOfBounds,
            message: format!(
                "{}: {} {}",
                field.label(),
                trimmed,
                field.bounds_hint()
            ),
        });
    }

    Ok(Some(value))
}
