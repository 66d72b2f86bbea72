pub mod cover_letter;
pub mod desktop;
pub mod shell;

pub use cover_letter::generate_cover_letter;
pub use desktop::DesktopActions;
pub use shell::{run_shell_command, ShellOutcome};

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The OS side-effect collaborator. Every call is fire-and-forget or
/// bounded-blocking; the router converts errors to reply text.
pub trait SystemActions {
    fn open_application(&self, path: &str) -> Result<(), ActionError>;
    fn close_application(&self, name: &str) -> Result<(), ActionError>;
    fn open_url(&self, url: &str) -> Result<(), ActionError>;
    fn open_folder(&self, path: &str) -> Result<(), ActionError>;
    fn set_system_volume(&self, level: i64) -> Result<(), ActionError>;
    fn run_shell(&self, command: &str, timeout: Duration) -> ShellOutcome;
    fn create_cover_letter(&self, job_url: &str, applicant_name: &str)
        -> Result<PathBuf, ActionError>;
}

pub fn expand_home(path: &str) -> String {
    if path == "~" {
        if let Some(home) = std::env::var_os("HOME") {
            return home.to_string_lossy().into_owned();
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest).display().to_string();
        }
    }
    path.to_string()
}
