use std::fmt::Write as _;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::warn;

use acidbase_core::models::config::EvaluationConfig;
use acidbase_core::models::lab::{FieldIssue, LabForm};
use acidbase_core::models::patient::PatientDetails;
use acidbase_core::models::report::Report;
use acidbase_engine::evaluate_form;
use acidbase_export::docx::generate_report_docx;
use acidbase_export::render::render_report;
use acidbase_export::rows::report_sections;
use acidbase_export::styles::DocumentStyles;
use acidbase_export::summary::{copy_summary, interpretation_lines};
use acidbase_extract::command::CommandExtractor;
use acidbase_extract::document::SourceDocument;
use acidbase_extract::fields::{ExtractedFields, parse_response};
use acidbase_extract::retry::{RetryPolicy, extract_with_retry};

use crate::args::{Cli, Command, ConfigCommand, LabArgs, OutputFormat, PatientArgs};
use crate::config::{self, AcidbaseConfig};

/// An evaluated form, ready to print.
#[derive(Debug, Serialize)]
pub struct Outcome {
    #[serde(flatten)]
    pub report: Report,
    pub issues: Vec<FieldIssue>,
    /// One-line summary for pasting into a note.
    pub summary: String,
}

impl Outcome {
    pub fn new(form: LabForm, patient: PatientDetails, config: EvaluationConfig) -> Self {
        let issues = form.issues();
        for issue in &issues {
            warn!(field = issue.field.key(), raw = %issue.raw, "{issue}");
        }

        let evaluation = evaluate_form(&form, &config);
        let summary = copy_summary(&evaluation);
        Self {
            report: Report::new(patient, form, config, evaluation),
            issues,
            summary,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for section in report_sections(&self.report) {
            let _ = writeln!(out, "{}", section.title);
            for row in section.rows {
                let flag = row.flag.map(|f| f.symbol()).unwrap_or("");
                let _ = writeln!(
                    out,
                    "  {:<22} {:>8} {:<1}  [{}]",
                    row.label, row.value, flag, row.range
                );
            }
            out.push('\n');
        }

        let lines = interpretation_lines(&self.report.evaluation);
        if !lines.is_empty() {
            out.push_str("INTERPRETATION\n");
            for line in lines {
                let _ = writeln!(out, "  - {line}");
            }
            out.push('\n');
        }

        if !self.summary.is_empty() {
            let _ = writeln!(out, "Summary: {}", self.summary);
        }
        out
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Interpret { labs, format } => {
            let config = config::load_config()?;
            let outcome = Outcome::new(
                labs.form(),
                PatientDetails::default(),
                labs.evaluation_config(&config)?,
            );
            print!("{}", outcome.render(format)?);
        }
        Command::Report {
            labs,
            patient,
            output,
        } => {
            let config = config::load_config()?;
            let outcome = Outcome::new(
                labs.form(),
                patient.details(&config),
                labs.evaluation_config(&config)?,
            );
            write_report(&outcome.report, &output, &config.styles)?;
            println!("{}", output.display());
        }
        Command::Merge {
            extracted,
            labs,
            patient,
            format,
        } => {
            let config = config::load_config()?;
            let reply = std::fs::read_to_string(&extracted)
                .wrap_err_with(|| format!("failed to read {}", extracted.display()))?;
            let fields = parse_response(&reply)?;
            let outcome = merged_outcome(&fields, &labs, &patient, &config)?;
            print!("{}", outcome.render(format)?);
        }
        Command::Extract {
            document,
            command,
            args,
            credential_var,
            labs,
            patient,
            format,
        } => {
            let config = config::load_config()?;
            let extractor = resolve_extractor(command, args, credential_var, &config)?;
            let document = SourceDocument::from_path(&document).await?;
            let fields =
                extract_with_retry(&extractor, &document, &RetryPolicy::default()).await?;
            let outcome = merged_outcome(&fields, &labs, &patient, &config)?;
            print!("{}", outcome.render(format)?);
        }
        Command::Config(command) => run_config(command)?,
    }
    Ok(())
}

/// Apply an extraction reply over the values given on the command line.
pub fn merged_outcome(
    fields: &ExtractedFields,
    labs: &LabArgs,
    patient: &PatientArgs,
    config: &AcidbaseConfig,
) -> Result<Outcome> {
    let mut form = labs.form();
    let mut details = patient.details(config);
    let applied = fields.merge_into(&mut form, &mut details);
    tracing::info!(applied, "merged extracted fields");

    Ok(Outcome::new(form, details, labs.evaluation_config(config)?))
}

/// Command-line extractor settings win over the config file's.
pub fn resolve_extractor(
    command: Option<String>,
    args: Vec<String>,
    credential_var: Option<String>,
    config: &AcidbaseConfig,
) -> Result<CommandExtractor> {
    let mut extractor = match command {
        Some(program) => CommandExtractor::new(program).args(args),
        None => config.extractor.clone().ok_or_else(|| {
            eyre::eyre!("no extractor configured: pass --command or set `extractor` in the config file")
        })?,
    };
    if let Some(var) = credential_var {
        extractor = extractor.credential_var(var);
    }
    Ok(extractor)
}

/// Write a report; the file extension picks DOCX or rendered text.
pub fn write_report(report: &Report, output: &Path, styles: &DocumentStyles) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let bytes = match extension.as_str() {
        "docx" => generate_report_docx(report, styles)?,
        "md" | "txt" => render_report(report)?.into_bytes(),
        _ => {
            return Err(eyre::eyre!(
                "unsupported report format for {}: use .docx, .md or .txt",
                output.display()
            ));
        }
    };

    std::fs::write(output, bytes)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), "report written");
    Ok(())
}

fn run_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = config::load_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            let path = config::config_path()?;
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {}; pass --force to replace it",
                    path.display()
                ));
            }
            let path = config::save_config(&AcidbaseConfig::default())?;
            println!("{}", path.display());
        }
        ConfigCommand::Path => println!("{}", config::config_path()?.display()),
    }
    Ok(())
}
