use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::config::ConfigState;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub display: Option<DisplayConfig>,
    pub browse: Option<BrowseConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Directory the file picker opens in.
    pub start_dir: Option<String>,
}

/// Platform config directory path: `<config_dir>/paperinator/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("paperinator").join("config.toml"))
}

/// Load config by cascading CWD `.paperinator.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".paperinator.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
        browse: Some(BrowseConfig {
            start_dir: overlay
                .browse
                .as_ref()
                .and_then(|b| b.start_dir.clone())
                .or_else(|| base.browse.as_ref().and_then(|b| b.start_dir.clone())),
        }),
    }
}

/// Save the config to `path`, creating parent directories.
pub fn save_config(config: &ConfigFile, path: &Path) -> Result<PathBuf, String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(path.to_path_buf())
}

/// Convert a `ConfigFile` into partial fills on a `ConfigState`.
/// Only sets values that are `Some` in the file config (doesn't overwrite with defaults).
pub fn apply_to_config_state(file_cfg: &ConfigFile, state: &mut ConfigState) {
    if let Some(disp) = &file_cfg.display
        && let Some(ref theme) = disp.theme
    {
        match theme.parse() {
            Ok(mode) => state.theme = mode,
            Err(e) => tracing::warn!(error = %e, "ignoring configured theme"),
        }
    }
    if let Some(browse) = &file_cfg.browse
        && let Some(ref dir) = browse.start_dir
        && !dir.is_empty()
    {
        state.start_dir = Some(PathBuf::from(dir));
    }
}

/// Convert a `ConfigState` into a `ConfigFile` for saving.
pub fn from_config_state(state: &ConfigState) -> ConfigFile {
    ConfigFile {
        display: Some(DisplayConfig {
            theme: Some(state.theme.name().to_string()),
        }),
        browse: Some(BrowseConfig {
            start_dir: state
                .start_dir
                .as_ref()
                .map(|d| d.display().to_string()),
        }),
    }
}
