use super::{ActionKind, ActionRequest};
use serde_json::{Map, Value};

pub const GREETING_REPLY: &str = "Hi, I'm Sunny. How can I help you?";

/// Which recovery step produced the result. Making this a value (instead of
/// catching parse errors at the call site) keeps the never-fails contract
/// structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole text was one well-formed JSON object.
    Strict,
    /// A balanced `{...}` span embedded in surrounding prose parsed.
    BraceSpan,
    /// Nothing parseable: the raw text becomes the assistant reply.
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAction {
    pub request: ActionRequest,
    pub outcome: ParseOutcome,
}

/// Total function over arbitrary model output. Models wrap JSON in prose or
/// emit malformed braces; every input maps to a structurally valid request.
pub fn parse_action(raw: &str) -> ParsedAction {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        return ParsedAction {
            request: request_from_object(map, raw),
            outcome: ParseOutcome::Strict,
        };
    }

    if let Some(span) = first_balanced_span(raw) {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(span) {
            return ParsedAction {
                request: request_from_object(map, raw),
                outcome: ParseOutcome::BraceSpan,
            };
        }
    }

    ParsedAction {
        request: ActionRequest::reply_only(raw),
        outcome: ParseOutcome::Fallback,
    }
}

/// The first span starting at `{` where brace depth returns to zero.
fn first_balanced_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in raw[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&raw[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn request_from_object(map: Map<String, Value>, raw: &str) -> ActionRequest {
    // Models occasionally answer with just {"none": {}}.
    if map.len() == 1 && map.contains_key("none") {
        return ActionRequest::reply_only(GREETING_REPLY);
    }

    let assistant_reply = map
        .get("assistant_reply")
        .map(value_to_text)
        .unwrap_or_default();

    let action = match map.get("action") {
        Some(Value::String(name)) => ActionKind::parse(name),
        Some(_) => ActionKind::NoAction,
        None => {
            // A bare reply object is a plain-text answer; anything else
            // unrecognizable falls back to the raw text so no content is
            // silently lost.
            if map.contains_key("assistant_reply") {
                return ActionRequest::reply_only(assistant_reply);
            }
            return ActionRequest::reply_only(raw);
        }
    };

    let args = map
        .get("args")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    ActionRequest {
        action,
        args,
        assistant_reply,
    }
}
