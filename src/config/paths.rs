use crate::config::ConfigError;
use std::path::{Path, PathBuf};

pub const GLOBAL_STATE_DIR: &str = ".sunny";
pub const GLOBAL_SETTINGS_FILE_NAME: &str = "config.yaml";
pub const APP_INDEX_FILE_NAME: &str = "app_index.json";
pub const INTERACTION_LOG_FILE_NAME: &str = "interactions.jsonl";

pub fn default_state_root() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(GLOBAL_STATE_DIR))
}

pub fn default_global_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_state_root()?.join(GLOBAL_SETTINGS_FILE_NAME))
}

pub fn app_index_path(state_root: &Path) -> PathBuf {
    state_root.join(APP_INDEX_FILE_NAME)
}

pub fn interaction_log_path(state_root: &Path) -> PathBuf {
    state_root.join("logs").join(INTERACTION_LOG_FILE_NAME)
}

pub fn cover_letter_dir(state_root: &Path) -> PathBuf {
    state_root.join("letters")
}
