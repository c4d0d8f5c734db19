use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioguardConfig {
    /// Schema version; see [`migrate`].
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// JSON model artifact loaded at startup.
    pub model_path: PathBuf,
    /// Optional Tera template replacing the built-in report layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    #[serde(default)]
    pub default_format: OutputFormat,
    pub created_at: jiff::Timestamp,
}

impl CardioguardConfig {
    pub fn new(model_path: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model_path,
            template_path: None,
            default_format: OutputFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.cardioguard.cli"))
}

/// Where the config lives when `--config` is not given.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<CardioguardConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(CURRENT_VERSION, |v| v as u32);

    let migrated = migrate(json, on_disk_version)?;
    let config: CardioguardConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update CardioGuard."
        ));
    }

    // Future migrations go here, e.g. `if from_version < 2 { ... }`.

    Ok(json)
}

pub fn save_config(config: &CardioguardConfig, path: &Path) -> eyre::Result<()> {
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

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
