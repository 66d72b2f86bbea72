use super::{
    expand_home, generate_cover_letter, run_shell_command, ActionError, ShellOutcome, SystemActions,
};
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Shell-command backed implementation of the OS collaborator: `open` for
/// apps, folders and URLs, `osascript` for volume and app quit.
#[derive(Debug, Clone)]
pub struct DesktopActions {
    cover_letter_dir: PathBuf,
    fetch_timeout: Duration,
}

impl DesktopActions {
    pub fn new(cover_letter_dir: PathBuf, fetch_timeout: Duration) -> Self {
        Self {
            cover_letter_dir,
            fetch_timeout,
        }
    }
}

fn fire_and_forget(binary: &str, args: &[&str]) -> Result<(), ActionError> {
    Command::new(binary)
        .args(args)
        .status()
        .map(|_| ())
        .map_err(|source| ActionError::Spawn {
            command: format!("{binary} {}", args.join(" ")),
            source,
        })
}

impl SystemActions for DesktopActions {
    fn open_application(&self, path: &str) -> Result<(), ActionError> {
        fire_and_forget("open", &[path])
    }

    fn close_application(&self, name: &str) -> Result<(), ActionError> {
        let script = format!("tell application \"{name}\" to quit");
        fire_and_forget("osascript", &["-e", &script])
    }

    fn open_url(&self, url: &str) -> Result<(), ActionError> {
        fire_and_forget("open", &[url])
    }

    fn open_folder(&self, path: &str) -> Result<(), ActionError> {
        let expanded = expand_home(path);
        fire_and_forget("open", &[&expanded])
    }

    fn set_system_volume(&self, level: i64) -> Result<(), ActionError> {
        let script = format!("set volume output volume {level}");
        fire_and_forget("osascript", &["-e", &script])
    }

    fn run_shell(&self, command: &str, timeout: Duration) -> ShellOutcome {
        run_shell_command(command, timeout)
    }

    fn create_cover_letter(
        &self,
        job_url: &str,
        applicant_name: &str,
    ) -> Result<PathBuf, ActionError> {
        generate_cover_letter(
            job_url,
            applicant_name,
            &self.cover_letter_dir,
            self.fetch_timeout,
        )
    }
}
