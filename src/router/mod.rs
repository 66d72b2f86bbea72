pub mod prompt;

pub use prompt::system_prompt;

use crate::actions::{expand_home, ShellOutcome, SystemActions};
use crate::index::{normalize_name, resolve, AppIndex};
use crate::llm::{ChatMessage, LanguageModel};
use crate::privacy::InteractionLogger;
use crate::protocol::{parse_action, ActionKind, ActionRequest};
use serde_json::{Map, Value};
use std::time::{Duration, Instant};

const FAST_PATH_TRIGGER: &str = "open ";
const DEFAULT_APPLICANT_NAME: &str = "Applicant";

/// Orchestrates one utterance end to end: deterministic fast path first,
/// otherwise model call, tolerant parse, dispatch. Every branch funnels to a
/// reply string and exactly one interaction log record; nothing raises to
/// the caller.
pub struct Router<'a> {
    index: &'a mut AppIndex,
    model: &'a dyn LanguageModel,
    actions: &'a dyn SystemActions,
    logger: &'a InteractionLogger,
    shell_timeout: Duration,
}

impl<'a> Router<'a> {
    pub fn new(
        index: &'a mut AppIndex,
        model: &'a dyn LanguageModel,
        actions: &'a dyn SystemActions,
        logger: &'a InteractionLogger,
        shell_timeout: Duration,
    ) -> Self {
        Self {
            index,
            model,
            actions,
            logger,
            shell_timeout,
        }
    }

    pub fn route(&mut self, user_text: &str) -> String {
        let started_at = Instant::now();
        let normalized = normalize_name(user_text);

        // Fast path: plain "open <something>" skips the model round-trip.
        // Very-sensitive utterances stay on the model path so the privacy
        // policy sees them unchanged.
        if let Some(query) = normalized.strip_prefix(FAST_PATH_TRIGGER) {
            if !self.logger.is_very_sensitive(&normalized) {
                let query = query.trim().to_string();
                let reply = self.open_app_by_query(&query);
                return self.finish(
                    user_text,
                    ActionKind::OpenApp,
                    single_arg("name", Value::String(query)),
                    reply,
                    started_at,
                );
            }
        }

        let messages = vec![
            ChatMessage::system(system_prompt()),
            ChatMessage::user(user_text),
        ];
        let raw = match self.model.complete(&messages) {
            Ok(raw) => raw,
            Err(err) => {
                let reply = format!("I couldn't reach the language model right now: {err}");
                return self.finish(user_text, ActionKind::NoAction, Map::new(), reply, started_at);
            }
        };

        let parsed = parse_action(&raw);
        self.dispatch(user_text, parsed.request, &raw, started_at)
    }

    /// REPL `run:` escape hatch; goes through the normal dispatch so the
    /// interaction is logged like any other shell action.
    pub fn route_shell_escape(&mut self, user_text: &str, command: &str) -> String {
        let started_at = Instant::now();
        let request = ActionRequest {
            action: ActionKind::RunShell,
            args: single_arg("command", Value::String(command.to_string())),
            assistant_reply: String::new(),
        };
        self.dispatch(user_text, request, "", started_at)
    }

    fn dispatch(
        &mut self,
        user_text: &str,
        request: ActionRequest,
        raw: &str,
        started_at: Instant,
    ) -> String {
        match request.action {
            ActionKind::OpenApp => {
                let name = request.arg_str("name").unwrap_or("").trim().to_string();
                let reply = self.open_app_by_query(&name);
                self.finish(
                    user_text,
                    ActionKind::OpenApp,
                    single_arg("name", Value::String(name)),
                    reply,
                    started_at,
                )
            }
            ActionKind::CloseApp => {
                let name = request.arg_str("name").unwrap_or("").trim().to_string();
                let reply = if name.is_empty() {
                    "Please tell me which app to close.".to_string()
                } else {
                    match self.actions.close_application(&name) {
                        Ok(()) => format!("Closing {name}."),
                        Err(err) => format!("Something went wrong closing {name}: {err}"),
                    }
                };
                self.finish(
                    user_text,
                    ActionKind::CloseApp,
                    single_arg("name", Value::String(name)),
                    reply,
                    started_at,
                )
            }
            ActionKind::OpenUrl => {
                let url = request.arg_str("url").unwrap_or("").trim().to_string();
                let reply = if url.is_empty() {
                    "Please give me the URL to open.".to_string()
                } else {
                    match self.actions.open_url(&url) {
                        Ok(()) => format!("Opening {url}."),
                        Err(err) => format!("Something went wrong opening the URL: {err}"),
                    }
                };
                self.finish(
                    user_text,
                    ActionKind::OpenUrl,
                    single_arg("url", Value::String(url)),
                    reply,
                    started_at,
                )
            }
            ActionKind::OpenFolder => {
                let path = request.arg_str("path").unwrap_or("~/").to_string();
                let expanded = expand_home(&path);
                let reply = match self.actions.open_folder(&path) {
                    Ok(()) => format!("Opening your folder: {expanded}"),
                    Err(err) => format!("Something went wrong opening the folder: {err}"),
                };
                self.finish(
                    user_text,
                    ActionKind::OpenFolder,
                    single_arg("path", Value::String(path)),
                    reply,
                    started_at,
                )
            }
            ActionKind::SetVolume => {
                // Out-of-range input is rejected, not clamped: silent
                // clamping would mask user mistakes.
                let (reply, level_arg) = match volume_level(&request.args) {
                    None => (
                        "Please give me a volume level between 0 and 100.".to_string(),
                        request.args.get("level").cloned().unwrap_or(Value::Null),
                    ),
                    Some(level) if !(0..=100).contains(&level) => (
                        "Volume level must be between 0 and 100.".to_string(),
                        Value::from(level),
                    ),
                    Some(level) => {
                        let reply = match self.actions.set_system_volume(level) {
                            Ok(()) => format!("Setting volume to {level}."),
                            Err(err) => {
                                format!("Something went wrong setting the volume: {err}")
                            }
                        };
                        (reply, Value::from(level))
                    }
                };
                self.finish(
                    user_text,
                    ActionKind::SetVolume,
                    single_arg("level", level_arg),
                    reply,
                    started_at,
                )
            }
            ActionKind::RunShell => {
                let command = request.arg_str("command").unwrap_or("").trim().to_string();
                let reply = if command.is_empty() {
                    "Please tell me which command to run.".to_string()
                } else {
                    shell_report(&self.actions.run_shell(&command, self.shell_timeout))
                };
                self.finish(
                    user_text,
                    ActionKind::RunShell,
                    single_arg("command", Value::String(command)),
                    reply,
                    started_at,
                )
            }
            ActionKind::CreateCoverLetter => {
                let url = request.arg_str("url").unwrap_or("").trim().to_string();
                let reply = if url.is_empty() {
                    "I need a job URL to create a cover letter.".to_string()
                } else {
                    let applicant = request
                        .arg_str("name")
                        .filter(|name| !name.trim().is_empty())
                        .unwrap_or(DEFAULT_APPLICANT_NAME);
                    match self.actions.create_cover_letter(&url, applicant) {
                        Ok(path) => {
                            format!("Your cover letter is ready at:\n{}", path.display())
                        }
                        Err(err) => {
                            format!("Something went wrong creating the cover letter: {err}")
                        }
                    }
                };
                self.finish(
                    user_text,
                    ActionKind::CreateCoverLetter,
                    request.args,
                    reply,
                    started_at,
                )
            }
            ActionKind::NoAction => {
                let reply = if request.assistant_reply.is_empty() {
                    // Nothing recoverable: surface the raw model text so no
                    // content is silently lost.
                    raw.to_string()
                } else {
                    request.assistant_reply
                };
                self.finish(user_text, ActionKind::NoAction, Map::new(), reply, started_at)
            }
        }
    }

    fn open_app_by_query(&mut self, query: &str) -> String {
        if query.trim().is_empty() {
            return "Please tell me which app to open.".to_string();
        }
        let candidates = resolve(query, self.index.load());

        match candidates.as_slice() {
            [] => format!(
                "Sorry, I couldn't find an app called '{}'.",
                normalize_name(query)
            ),
            [only] => match self.actions.open_application(&only.path) {
                Ok(()) => format!("Opening {}.", only.display_name),
                Err(err) => format!(
                    "Something went wrong trying to open {}: {err}",
                    only.display_name
                ),
            },
            _ => {
                let mut names: Vec<&str> = candidates
                    .iter()
                    .map(|candidate| candidate.display_name.as_str())
                    .collect();
                names.sort_unstable();
                format!(
                    "I found several apps matching '{}': {}. \
                     Please say or type the full name, for example: 'open {}'",
                    normalize_name(query),
                    names.join(", "),
                    candidates[0].display_name
                )
            }
        }
    }

    fn finish(
        &self,
        user_text: &str,
        action: ActionKind,
        args: Map<String, Value>,
        reply: String,
        started_at: Instant,
    ) -> String {
        self.logger
            .record(user_text, action, &args, &reply, started_at);
        reply
    }
}

fn single_arg(key: &str, value: Value) -> Map<String, Value> {
    let mut args = Map::new();
    args.insert(key.to_string(), value);
    args
}

fn volume_level(args: &Map<String, Value>) -> Option<i64> {
    match args.get("level") {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .map(|value| value as i64)
        }),
        Some(Value::String(raw)) => raw.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn shell_report(outcome: &ShellOutcome) -> String {
    format!(
        "Command exit code: {}\n\nstdout:\n{}\n\nstderr:\n{}",
        outcome.exit_code, outcome.stdout, outcome.stderr
    )
}
