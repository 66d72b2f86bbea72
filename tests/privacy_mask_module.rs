use sunny::privacy::{contains_very_sensitive, mask_digit_runs, REDACTION_TOKEN};

#[test]
fn privacy_mask_module_masks_runs_of_four_or_more_digits() {
    assert_eq!(
        mask_digit_runs("my otp is 123456, open safari"),
        format!("my otp is {REDACTION_TOKEN}, open safari")
    );
    assert_eq!(mask_digit_runs("pin 1234"), format!("pin {REDACTION_TOKEN}"));
    assert_eq!(
        mask_digit_runs("1234 and 987654321"),
        format!("{REDACTION_TOKEN} and {REDACTION_TOKEN}")
    );
}

#[test]
fn privacy_mask_module_keeps_short_digit_runs() {
    assert_eq!(mask_digit_runs("set volume to 30"), "set volume to 30");
    assert_eq!(mask_digit_runs("room 101"), "room 101");
    assert_eq!(mask_digit_runs("no digits here"), "no digits here");
    assert_eq!(mask_digit_runs(""), "");
}

#[test]
fn privacy_mask_module_detects_very_sensitive_keywords_case_insensitively() {
    let keywords: Vec<String> = ["banking", "keychain", "password manager"]
        .iter()
        .map(|kw| kw.to_string())
        .collect();

    assert!(contains_very_sensitive("open my BANKING app", &keywords));
    assert!(contains_very_sensitive("show the Password Manager", &keywords));
    assert!(!contains_very_sensitive("open safari", &keywords));
    assert!(!contains_very_sensitive("", &keywords));
}
