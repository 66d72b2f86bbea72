pub const REDACTION_TOKEN: &str = "******";

const DIGIT_RUN_THRESHOLD: usize = 4;

/// Replace every run of four or more consecutive ASCII digits with the
/// redaction token. Covers PIN/OTP-like content; shorter runs (years, small
/// counts) stay readable.
pub fn mask_digit_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(ch);
    }
    flush_run(&mut out, &mut run);
    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.len() >= DIGIT_RUN_THRESHOLD {
        out.push_str(REDACTION_TOKEN);
    } else {
        out.push_str(run);
    }
    run.clear();
}

/// Interactions matching one of these keywords are never persisted at all,
/// masked or otherwise. The reply still reaches the user.
pub fn contains_very_sensitive(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && lower.contains(&kw.to_lowercase()))
}
