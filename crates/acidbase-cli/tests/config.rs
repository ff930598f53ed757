use acidbase_cli::config::{
    AcidbaseConfig, CURRENT_VERSION, load_config_from, migrate, save_config_to,
};
use acidbase_core::models::config::{PressureUnit, RespiratoryDuration};
use acidbase_extract::command::CommandExtractor;
use serde_json::json;

#[test]
fn v0_config_gains_pressure_unit() {
    let migrated = migrate(json!({ "barometric_pressure": 700 }), 0).expect("migrates");

    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["pressure_unit"], "mmHg");
    assert_eq!(migrated["barometric_pressure"], 700);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acidbase").join("config.json");

    let config = AcidbaseConfig {
        config_version: 0,
        respiratory_duration: RespiratoryDuration::Chronic,
        barometric_pressure: 620,
        pressure_unit: PressureUnit::KPa,
        hospital: "Mountain Clinic".into(),
        extractor: Some(CommandExtractor::new("ocr-abg").credential_var("OCR_KEY")),
        ..Default::default()
    };
    save_config_to(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(
        loaded,
        AcidbaseConfig {
            config_version: CURRENT_VERSION,
            ..config
        }
    );
}

#[test]
fn partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1, "hospital": "General" }"#).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.hospital, "General");
    assert_eq!(loaded.barometric_pressure, 760);
    assert_eq!(loaded.respiratory_duration, RespiratoryDuration::Acute);
    assert_eq!(loaded.styles.body_font, "Calibri");
    assert!(loaded.extractor.is_none());
}

#[test]
fn out_of_range_pressure_in_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1, "barometric_pressure": 300 }"#).unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn oversized_version_in_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    // 2^32 + 1 would wrap to 1 if truncated.
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn default_config_is_valid() {
    let config = AcidbaseConfig::default();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert!(config.evaluation_config().is_ok());
}
