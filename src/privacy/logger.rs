use super::{contains_very_sensitive, mask_digit_runs};
use crate::protocol::ActionKind;
use crate::shared::logging::append_runtime_log_line;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const SLOW_REPLY_THRESHOLD_MS: u64 = 1000;

/// One routed utterance, as persisted. Append-only; never mutated after
/// write. `user_text` is the masked copy, never the text used for routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionLogEntry {
    pub timestamp: String,
    pub user_text: String,
    pub action: ActionKind,
    pub args: Map<String, Value>,
    pub assistant_reply: String,
    pub latency_ms: u64,
    pub slow: bool,
}

impl InteractionLogEntry {
    pub fn new(
        masked_user_text: String,
        action: ActionKind,
        args: Map<String, Value>,
        assistant_reply: String,
        latency_ms: u64,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            user_text: masked_user_text,
            action,
            args,
            assistant_reply,
            latency_ms,
            slow: latency_ms > SLOW_REPLY_THRESHOLD_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionLogger {
    state_root: PathBuf,
    log_path: PathBuf,
    very_sensitive_keywords: Vec<String>,
}

impl InteractionLogger {
    pub fn new(state_root: PathBuf, very_sensitive_keywords: Vec<String>) -> Self {
        let log_path = crate::config::interaction_log_path(&state_root);
        Self {
            state_root,
            log_path,
            very_sensitive_keywords,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn is_very_sensitive(&self, text: &str) -> bool {
        contains_very_sensitive(text, &self.very_sensitive_keywords)
    }

    /// Best-effort: a write failure goes to the runtime log and the reply
    /// still reaches the user. Very-sensitive utterances are skipped whole.
    pub fn record(
        &self,
        user_text: &str,
        action: ActionKind,
        args: &Map<String, Value>,
        assistant_reply: &str,
        started_at: Instant,
    ) {
        let latency_ms = started_at.elapsed().as_millis() as u64;
        if self.is_very_sensitive(user_text) {
            append_runtime_log_line(
                &self.state_root,
                "interaction log skipped for sensitive command",
            );
            return;
        }

        let entry = InteractionLogEntry::new(
            mask_digit_runs(user_text),
            action,
            args.clone(),
            assistant_reply.to_string(),
            latency_ms,
        );
        if let Err(err) = self.append_entry(&entry) {
            append_runtime_log_line(
                &self.state_root,
                &format!("failed to append interaction log entry: {err}"),
            );
        }
    }

    fn append_entry(&self, entry: &InteractionLogEntry) -> std::io::Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        line.push('\n');
        // One write per entry keeps concurrent appends from interleaving.
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        file.write_all(line.as_bytes())
    }
}
