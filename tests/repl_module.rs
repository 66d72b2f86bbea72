use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;
use sunny::actions::{ActionError, ShellOutcome, SystemActions};
use sunny::index::AppIndex;
use sunny::llm::{ChatMessage, LanguageModel, LlmError};
use sunny::privacy::InteractionLogger;
use sunny::repl::{is_exit_command, run_repl};
use sunny::router::Router;

struct EchoModel;

impl LanguageModel for EchoModel {
    fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        Ok(r#"{"action": "none", "args": {}, "assistant_reply": "Chatting."}"#.to_string())
    }
}

#[derive(Default)]
struct RecordingActions {
    calls: RefCell<Vec<String>>,
}

impl SystemActions for RecordingActions {
    fn open_application(&self, path: &str) -> Result<(), ActionError> {
        self.calls.borrow_mut().push(format!("open_application {path}"));
        Ok(())
    }

    fn close_application(&self, _name: &str) -> Result<(), ActionError> {
        Ok(())
    }

    fn open_url(&self, _url: &str) -> Result<(), ActionError> {
        Ok(())
    }

    fn open_folder(&self, _path: &str) -> Result<(), ActionError> {
        Ok(())
    }

    fn set_system_volume(&self, _level: i64) -> Result<(), ActionError> {
        Ok(())
    }

    fn run_shell(&self, command: &str, _timeout: Duration) -> ShellOutcome {
        self.calls.borrow_mut().push(format!("run_shell {command}"));
        ShellOutcome {
            exit_code: 0,
            stdout: "hi".to_string(),
            stderr: String::new(),
        }
    }

    fn create_cover_letter(
        &self,
        _job_url: &str,
        _applicant_name: &str,
    ) -> Result<PathBuf, ActionError> {
        Ok(PathBuf::from("/tmp/Cover_Letter.md"))
    }
}

fn session_parts(temp: &tempfile::TempDir) -> (AppIndex, InteractionLogger) {
    let mut entries = BTreeMap::new();
    entries.insert(
        "google chrome".to_string(),
        "/Applications/Google Chrome.app".to_string(),
    );
    let index = AppIndex::from_entries(entries);
    let logger = InteractionLogger::new(temp.path().to_path_buf(), Vec::new());
    (index, logger)
}

#[test]
fn repl_module_recognizes_exit_commands() {
    assert!(is_exit_command("exit"));
    assert!(is_exit_command("  QUIT  "));
    assert!(!is_exit_command("exit now"));
    assert!(!is_exit_command("open chrome"));
}

#[test]
fn repl_module_routes_lines_until_exit() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (mut index, logger) = session_parts(&temp);
    let model = EchoModel;
    let actions = RecordingActions::default();
    let mut router = Router::new(&mut index, &model, &actions, &logger, Duration::from_secs(5));

    let mut input = Cursor::new("open chrome\nexit\n");
    let mut output = Vec::new();
    run_repl(&mut router, &mut input, &mut output).expect("repl runs");

    let transcript = String::from_utf8(output).expect("utf8 transcript");
    assert!(transcript.contains("Sunny - type 'exit' to quit."));
    assert!(transcript.contains("Sunny: Opening google chrome."));
    assert!(transcript.contains(" ms]"));
    assert!(transcript.ends_with("Sunny: Bye!\n"));
    assert_eq!(
        actions.calls.borrow().as_slice(),
        ["open_application /Applications/Google Chrome.app"]
    );
}

#[test]
fn repl_module_shell_escape_runs_the_command_directly() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (mut index, logger) = session_parts(&temp);
    let model = EchoModel;
    let actions = RecordingActions::default();
    let mut router = Router::new(&mut index, &model, &actions, &logger, Duration::from_secs(5));

    let mut input = Cursor::new("run: echo hi\nquit\n");
    let mut output = Vec::new();
    run_repl(&mut router, &mut input, &mut output).expect("repl runs");

    let transcript = String::from_utf8(output).expect("utf8 transcript");
    assert!(transcript.contains("Command exit code: 0"));
    assert!(transcript.contains("stdout:\nhi"));
    assert_eq!(actions.calls.borrow().as_slice(), ["run_shell echo hi"]);
}

#[test]
fn repl_module_eof_ends_the_session_with_a_goodbye() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (mut index, logger) = session_parts(&temp);
    let model = EchoModel;
    let actions = RecordingActions::default();
    let mut router = Router::new(&mut index, &model, &actions, &logger, Duration::from_secs(5));

    let mut input = Cursor::new("");
    let mut output = Vec::new();
    run_repl(&mut router, &mut input, &mut output).expect("repl runs");

    let transcript = String::from_utf8(output).expect("utf8 transcript");
    assert!(transcript.contains("Sunny: Bye!"));
}

#[test]
fn repl_module_skips_blank_lines_without_routing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (mut index, logger) = session_parts(&temp);
    let model = EchoModel;
    let actions = RecordingActions::default();
    let mut router = Router::new(&mut index, &model, &actions, &logger, Duration::from_secs(5));

    let mut input = Cursor::new("\n   \nexit\n");
    let mut output = Vec::new();
    run_repl(&mut router, &mut input, &mut output).expect("repl runs");

    let transcript = String::from_utf8(output).expect("utf8 transcript");
    assert!(!transcript.contains("Sunny: Chatting."));
    assert!(transcript.contains("Sunny: Bye!"));
}
