pub mod client;
pub mod prompt;

pub use client::OllamaClient;
pub use prompt::messages_to_prompt;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("language model request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },
    #[error("language model response could not be decoded: {reason}")]
    Decode { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The single seam to the model collaborator; the router only sees this
/// trait, so tests substitute a scripted implementation.
pub trait LanguageModel {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}
