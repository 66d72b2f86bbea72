pub mod logger;
pub mod mask;

pub use logger::{InteractionLogEntry, InteractionLogger, SLOW_REPLY_THRESHOLD_MS};
pub use mask::{contains_very_sensitive, mask_digit_runs, REDACTION_TOKEN};
