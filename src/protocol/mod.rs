pub mod parse;
pub mod types;

pub use parse::{parse_action, ParseOutcome, ParsedAction, GREETING_REPLY};
pub use types::{ActionKind, ActionRequest};
