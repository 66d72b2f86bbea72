use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutcome {
    fn failed(message: String) -> Self {
        Self {
            exit_code: -1,
            stdout: String::new(),
            stderr: message,
        }
    }
}

/// Run `command` through the user's shell with a hard wall-clock timeout.
/// Errors and timeouts are folded into the outcome (exit code -1 plus a
/// diagnostic in stderr), never raised: the router reports, it does not retry.
pub fn run_shell_command(command: &str, timeout: Duration) -> ShellOutcome {
    let mut child = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => return ShellOutcome::failed(format!("Error running command: {err}")),
    };

    let Some(stdout) = child.stdout.take() else {
        let _ = child.kill();
        return ShellOutcome::failed("Error running command: missing stdout pipe".to_string());
    };
    let Some(stderr) = child.stderr.take() else {
        let _ = child.kill();
        return ShellOutcome::failed("Error running command: missing stderr pipe".to_string());
    };

    let stdout_reader = thread::spawn(move || read_all(stdout));
    let stderr_reader = thread::spawn(move || read_all(stderr));

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if started.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Grandchildren can hold the pipe write ends open past
                    // the kill, so the readers are abandoned, not joined.
                    return ShellOutcome::failed(format!(
                        "Command timed out after {} seconds.",
                        timeout.as_secs()
                    ));
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
            Err(err) => {
                return ShellOutcome::failed(format!("Error running command: {err}"));
            }
        }
    };

    ShellOutcome {
        exit_code: status.code().unwrap_or(-1),
        stdout: stdout_reader
            .join()
            .unwrap_or_default()
            .trim()
            .to_string(),
        stderr: stderr_reader
            .join()
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}

fn read_all(mut source: impl Read) -> String {
    let mut buf = String::new();
    let _ = source.read_to_string(&mut buf);
    buf
}
