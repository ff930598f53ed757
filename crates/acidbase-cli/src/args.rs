use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use acidbase_core::models::config::{EvaluationConfig, PressureUnit, RespiratoryDuration};
use acidbase_core::models::lab::{LabField, LabForm};
use acidbase_core::models::patient::PatientDetails;

use crate::config::AcidbaseConfig;

/// Arterial blood gas interpretation
#[derive(Parser, Debug)]
#[command(name = "acidbase")]
#[command(author, version, about = "Arterial blood gas interpretation and reporting")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret a set of lab values
    Interpret {
        #[command(flatten)]
        labs: LabArgs,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a printable report (.docx or .md)
    Report {
        #[command(flatten)]
        labs: LabArgs,

        #[command(flatten)]
        patient: PatientArgs,

        /// Output file; the extension selects the format
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Merge a saved extraction reply over the given values and interpret
    Merge {
        /// File holding the extractor's raw JSON reply
        #[arg(short, long)]
        extracted: PathBuf,

        #[command(flatten)]
        labs: LabArgs,

        #[command(flatten)]
        patient: PatientArgs,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract values from a scanned report with an external program
    Extract {
        /// PDF or image of the ABG report
        document: PathBuf,

        /// Extractor program; overrides the one in the config file
        #[arg(long)]
        command: Option<String>,

        /// Argument passed to the extractor program (repeatable)
        #[arg(long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Environment variable that must hold the extractor's credential
        #[arg(long)]
        credential_var: Option<String>,

        #[command(flatten)]
        labs: LabArgs,

        #[command(flatten)]
        patient: PatientArgs,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Lab values as typed, plus evaluation settings. Settings left unset fall
/// back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct LabArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub ph: Option<String>,
    /// PaCO₂ in the selected unit
    #[arg(long, allow_hyphen_values = true)]
    pub paco2: Option<String>,
    /// HCO₃⁻ in mEq/L
    #[arg(long, allow_hyphen_values = true)]
    pub hco3: Option<String>,
    /// PaO₂ in the selected unit
    #[arg(long, allow_hyphen_values = true)]
    pub pao2: Option<String>,
    /// Inspired oxygen fraction, 0.21 on room air
    #[arg(long, allow_hyphen_values = true)]
    pub fio2: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub na: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub cl: Option<String>,

    /// Respiratory disorder duration: acute or chronic
    #[arg(long)]
    pub duration: Option<RespiratoryDuration>,
    /// Barometric pressure in mmHg (500-800)
    #[arg(long)]
    pub barometric: Option<u16>,
    /// Unit of PaCO₂ and PaO₂: mmHg or kPa
    #[arg(long)]
    pub unit: Option<PressureUnit>,
}

impl LabArgs {
    /// The form holding every value given on the command line.
    pub fn form(&self) -> LabForm {
        let mut form = LabForm::default();
        self.apply(&mut form);
        form
    }

    /// Overwrite only the fields given on the command line.
    pub fn apply(&self, form: &mut LabForm) {
        for field in LabField::ALL {
            if let Some(value) = self.value(field) {
                form.set(field, value.as_str());
            }
        }
    }

    fn value(&self, field: LabField) -> Option<&String> {
        match field {
            LabField::Ph => self.ph.as_ref(),
            LabField::Paco2 => self.paco2.as_ref(),
            LabField::Hco3 => self.hco3.as_ref(),
            LabField::Pao2 => self.pao2.as_ref(),
            LabField::Fio2 => self.fio2.as_ref(),
            LabField::Na => self.na.as_ref(),
            LabField::Cl => self.cl.as_ref(),
        }
    }

    /// Flags override the config file, which overrides built-in defaults.
    pub fn evaluation_config(&self, config: &AcidbaseConfig) -> eyre::Result<EvaluationConfig> {
        Ok(EvaluationConfig::new(
            self.duration.unwrap_or(config.respiratory_duration),
            self.barometric.unwrap_or(config.barometric_pressure),
            self.unit.unwrap_or(config.pressure_unit),
        )?)
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub mrn: Option<String>,
    #[arg(long)]
    pub hospital: Option<String>,
}

impl PatientArgs {
    /// Overwrite only the fields given on the command line.
    pub fn apply(&self, patient: &mut PatientDetails) {
        let fields = [
            (&self.name, &mut patient.name),
            (&self.age, &mut patient.age),
            (&self.mrn, &mut patient.mrn),
            (&self.hospital, &mut patient.hospital),
        ];
        for (arg, slot) in fields {
            if let Some(value) = arg {
                *slot = value.clone();
            }
        }
    }

    /// Patient details with the config's hospital as the fallback.
    pub fn details(&self, config: &AcidbaseConfig) -> PatientDetails {
        let mut patient = PatientDetails {
            hospital: config.hospital.clone(),
            ..Default::default()
        };
        self.apply(&mut patient);
        patient
    }
}
