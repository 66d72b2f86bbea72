use serde_json::Map;
use std::fs;
use std::time::Instant;
use sunny::privacy::{InteractionLogEntry, InteractionLogger, SLOW_REPLY_THRESHOLD_MS};
use sunny::protocol::ActionKind;

fn logger_in(temp: &tempfile::TempDir) -> InteractionLogger {
    InteractionLogger::new(
        temp.path().to_path_buf(),
        vec!["banking".to_string(), "keychain".to_string()],
    )
}

fn log_lines(logger: &InteractionLogger) -> Vec<String> {
    match fs::read_to_string(logger.log_path()) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn privacy_logger_module_appends_one_masked_entry_per_interaction() {
    let temp = tempfile::tempdir().expect("tempdir");
    let logger = logger_in(&temp);

    logger.record(
        "my otp is 123456, open safari",
        ActionKind::OpenApp,
        &Map::new(),
        "Opening safari.",
        Instant::now(),
    );

    let lines = log_lines(&logger);
    assert_eq!(lines.len(), 1);

    let entry: InteractionLogEntry = serde_json::from_str(&lines[0]).expect("entry");
    assert!(!entry.user_text.contains("123456"));
    assert!(entry.user_text.contains("******"));
    assert_eq!(entry.action, ActionKind::OpenApp);
    assert_eq!(entry.assistant_reply, "Opening safari.");
    assert!(!entry.slow);
}

#[test]
fn privacy_logger_module_skips_very_sensitive_interactions_entirely() {
    let temp = tempfile::tempdir().expect("tempdir");
    let logger = logger_in(&temp);

    logger.record(
        "open my banking app",
        ActionKind::NoAction,
        &Map::new(),
        "This is sensitive.",
        Instant::now(),
    );

    assert!(log_lines(&logger).is_empty());
}

#[test]
fn privacy_logger_module_appends_entries_without_interleaving() {
    let temp = tempfile::tempdir().expect("tempdir");
    let logger = logger_in(&temp);

    for n in 0..5 {
        logger.record(
            &format!("utterance {n}"),
            ActionKind::NoAction,
            &Map::new(),
            "reply",
            Instant::now(),
        );
    }

    let lines = log_lines(&logger);
    assert_eq!(lines.len(), 5);
    for line in lines {
        serde_json::from_str::<InteractionLogEntry>(&line).expect("each line parses alone");
    }
}

#[test]
fn privacy_logger_module_flags_slow_interactions_above_threshold() {
    let fast = InteractionLogEntry::new(
        "hello".to_string(),
        ActionKind::NoAction,
        Map::new(),
        "hi".to_string(),
        SLOW_REPLY_THRESHOLD_MS,
    );
    assert!(!fast.slow);

    let slow = InteractionLogEntry::new(
        "hello".to_string(),
        ActionKind::NoAction,
        Map::new(),
        "hi".to_string(),
        SLOW_REPLY_THRESHOLD_MS + 1,
    );
    assert!(slow.slow);
}
