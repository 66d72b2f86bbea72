use super::{default_global_config_path, ConfigError, Settings};
use std::path::Path;

/// Missing settings file means first run: defaults apply, nothing is written.
pub fn load_global_settings() -> Result<Settings, ConfigError> {
    let path = default_global_config_path()?;
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let settings = Settings::from_path(path)?;
    settings.validate()?;
    Ok(settings)
}
