use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use acidbase_core::models::config::{EvaluationConfig, PressureUnit, RespiratoryDuration};
use acidbase_export::styles::DocumentStyles;
use acidbase_extract::command::CommandExtractor;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidbaseConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub respiratory_duration: RespiratoryDuration,
    #[serde(default = "default_barometric_pressure")]
    pub barometric_pressure: u16,
    /// Added in v1; v0 configs were always mmHg.
    #[serde(default)]
    pub pressure_unit: PressureUnit,
    /// Printed on reports when no hospital is given for the patient.
    #[serde(default)]
    pub hospital: String,
    #[serde(default)]
    pub styles: DocumentStyles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<CommandExtractor>,
}

impl Default for AcidbaseConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            respiratory_duration: RespiratoryDuration::default(),
            barometric_pressure: EvaluationConfig::DEFAULT_BAROMETRIC_PRESSURE,
            pressure_unit: PressureUnit::default(),
            hospital: String::new(),
            styles: DocumentStyles::default(),
            extractor: None,
        }
    }
}

impl AcidbaseConfig {
    /// Evaluation settings from the file alone, range-checked.
    pub fn evaluation_config(&self) -> eyre::Result<EvaluationConfig> {
        Ok(EvaluationConfig::new(
            self.respiratory_duration,
            self.barometric_pressure,
            self.pressure_unit,
        )?)
    }
}

fn default_barometric_pressure() -> u16 {
    EvaluationConfig::DEFAULT_BAROMETRIC_PRESSURE
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("acidbase"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user's config, or built-in defaults when none has been saved.
pub fn load_config() -> eyre::Result<AcidbaseConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AcidbaseConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AcidbaseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version)
            .map_err(|_| eyre::eyre!("config_version {version} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: AcidbaseConfig = serde_json::from_value(migrated)?;
    config.evaluation_config()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update acidbase."
        ));
    }

    // v0 → v1: add pressure_unit (v0 only understood mmHg)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("pressure_unit")
            .or_insert(serde_json::Value::String(PressureUnit::MmHg.label().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added pressure_unit)");
    }

    Ok(json)
}

pub fn save_config(config: &AcidbaseConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &AcidbaseConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
