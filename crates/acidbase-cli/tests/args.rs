use acidbase_cli::args::{Cli, Command, ConfigCommand, OutputFormat};
use acidbase_cli::config::AcidbaseConfig;
use acidbase_core::models::config::{PressureUnit, RespiratoryDuration};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("acidbase").chain(args.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn interpret_collects_lab_flags() {
    let cli = parse(&[
        "interpret", "--ph", "7.20", "--paco2", "60", "--hco3", "24", "--format", "json",
    ]);

    let Command::Interpret { labs, format } = cli.command else {
        panic!("expected interpret");
    };
    assert_eq!(format, OutputFormat::Json);

    let form = labs.form();
    assert_eq!(form.ph, "7.20");
    assert_eq!(form.paco2, "60");
    assert_eq!(form.hco3, "24");
    assert!(form.pao2.is_empty());
}

#[test]
fn flags_override_config_file() {
    let cli = parse(&[
        "interpret", "--duration", "chronic", "--barometric", "640", "--unit", "kpa",
    ]);
    let Command::Interpret { labs, .. } = cli.command else {
        panic!("expected interpret");
    };

    let file = AcidbaseConfig {
        barometric_pressure: 700,
        ..Default::default()
    };
    let config = labs.evaluation_config(&file).expect("in range");

    assert_eq!(config.respiratory_duration, RespiratoryDuration::Chronic);
    assert_eq!(config.barometric_pressure, 640);
    assert_eq!(config.pressure_unit, PressureUnit::KPa);
}

#[test]
fn config_file_overrides_builtin_defaults() {
    let cli = parse(&["interpret"]);
    let Command::Interpret { labs, .. } = cli.command else {
        panic!("expected interpret");
    };

    let file = AcidbaseConfig {
        respiratory_duration: RespiratoryDuration::Chronic,
        barometric_pressure: 700,
        ..Default::default()
    };
    let config = labs.evaluation_config(&file).expect("in range");
    assert_eq!(config.respiratory_duration, RespiratoryDuration::Chronic);
    assert_eq!(config.barometric_pressure, 700);
    assert_eq!(config.pressure_unit, PressureUnit::MmHg);

    let builtin = labs
        .evaluation_config(&AcidbaseConfig::default())
        .expect("defaults are valid");
    assert_eq!(builtin.barometric_pressure, 760);
    assert_eq!(builtin.respiratory_duration, RespiratoryDuration::Acute);
}

#[test]
fn out_of_range_barometric_pressure_is_rejected() {
    let cli = parse(&["interpret", "--barometric", "900"]);
    let Command::Interpret { labs, .. } = cli.command else {
        panic!("expected interpret");
    };
    assert!(labs.evaluation_config(&AcidbaseConfig::default()).is_err());
}

#[test]
fn unknown_duration_is_a_parse_error() {
    let result = Cli::try_parse_from(["acidbase", "interpret", "--duration", "subacute"]);
    assert!(result.is_err());
}

#[test]
fn negative_values_reach_the_form() {
    let cli = parse(&["interpret", "--hco3", "-4"]);
    let Command::Interpret { labs, .. } = cli.command else {
        panic!("expected interpret");
    };
    let form = labs.form();
    assert_eq!(form.hco3, "-4");
    assert_eq!(form.issues().len(), 1);
}

#[test]
fn report_requires_output() {
    assert!(Cli::try_parse_from(["acidbase", "report", "--ph", "7.4"]).is_err());

    let cli = parse(&["report", "--ph", "7.4", "--name", "Jane Doe", "-o", "out.docx"]);
    let Command::Report { patient, output, .. } = cli.command else {
        panic!("expected report");
    };
    assert_eq!(patient.name.as_deref(), Some("Jane Doe"));
    assert_eq!(output.to_str(), Some("out.docx"));
}

#[test]
fn patient_hospital_falls_back_to_config() {
    let cli = parse(&["report", "--mrn", "123", "-o", "r.md"]);
    let Command::Report { patient, .. } = cli.command else {
        panic!("expected report");
    };

    let file = AcidbaseConfig {
        hospital: "Royal Infirmary".into(),
        ..Default::default()
    };
    let details = patient.details(&file);
    assert_eq!(details.hospital, "Royal Infirmary");
    assert_eq!(details.mrn, "123");
    assert!(details.name.is_empty());
}

#[test]
fn config_subcommands_parse() {
    assert!(matches!(
        parse(&["config", "init", "--force"]).command,
        Command::Config(ConfigCommand::Init { force: true })
    ));
    assert!(matches!(
        parse(&["config", "path"]).command,
        Command::Config(ConfigCommand::Path)
    ));
}

#[test]
fn extract_accepts_repeated_args() {
    let cli = parse(&[
        "extract", "scan.pdf", "--command", "ocr-abg", "--arg", "--model", "--arg", "fast",
    ]);
    let Command::Extract { command, args, .. } = cli.command else {
        panic!("expected extract");
    };
    assert_eq!(command.as_deref(), Some("ocr-abg"));
    assert_eq!(args, ["--model", "fast"]);
}
