use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_model_endpoint() -> String {
    "http://127.0.0.1:11434/api/generate".to_string()
}

fn default_model_name() -> String {
    "phi3:latest".to_string()
}

fn default_model_timeout_secs() -> u64 {
    120
}

fn default_shell_timeout_secs() -> u64 {
    10
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_app_scan_roots() -> Vec<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/System/Applications"),
        PathBuf::from("/System/Library/CoreServices"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        roots.push(PathBuf::from(home).join("Applications"));
    }
    roots
}

fn default_very_sensitive_keywords() -> Vec<String> {
    ["bank", "banking", "keychain", "password manager"]
        .iter()
        .map(|kw| kw.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_model_endpoint")]
    pub model_endpoint: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,
    #[serde(default = "default_shell_timeout_secs")]
    pub shell_timeout_secs: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_app_scan_roots")]
    pub app_scan_roots: Vec<PathBuf>,
    #[serde(default = "default_very_sensitive_keywords")]
    pub very_sensitive_keywords: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_endpoint: default_model_endpoint(),
            model_name: default_model_name(),
            model_timeout_secs: default_model_timeout_secs(),
            shell_timeout_secs: default_shell_timeout_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            app_scan_roots: default_app_scan_roots(),
            very_sensitive_keywords: default_very_sensitive_keywords(),
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "model_endpoint must be non-empty".to_string(),
            });
        }
        if self.model_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "model_name must be non-empty".to_string(),
            });
        }
        if self.model_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                reason: "model_timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.shell_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                reason: "shell_timeout_secs must be greater than zero".to_string(),
            });
        }
        if self
            .very_sensitive_keywords
            .iter()
            .any(|kw| kw.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                reason: "very_sensitive_keywords must not contain empty entries".to_string(),
            });
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let rendered = serde_yaml::to_string(self).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
        crate::shared::fs_atomic::atomic_write_file(path, rendered.as_bytes()).map_err(|source| {
            ConfigError::Write {
                path: path.display().to_string(),
                source,
            }
        })
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    pub fn shell_timeout(&self) -> Duration {
        Duration::from_secs(self.shell_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
