use super::{ChatMessage, Role};

/// Flatten a chat transcript into a single prompt for `/api/generate`. The
/// trailing `[Assistant]` block nudges the model into the assistant turn.
pub fn messages_to_prompt(messages: &[ChatMessage]) -> String {
    let mut parts = Vec::with_capacity(messages.len() + 1);
    for message in messages {
        let tag = match message.role {
            Role::System => "[System]",
            Role::Assistant => "[Assistant]",
            Role::User => "[User]",
        };
        parts.push(format!("{tag}\n{}\n", message.content));
    }
    parts.push("[Assistant]\n".to_string());
    parts.join("\n")
}
