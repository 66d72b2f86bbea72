use std::fs;
use std::time::Duration;
use sunny::config::{load_settings_from, ConfigError, Settings};

#[test]
fn config_settings_module_defaults_point_at_local_ollama() {
    let settings = Settings::default();
    assert_eq!(settings.model_endpoint, "http://127.0.0.1:11434/api/generate");
    assert_eq!(settings.model_name, "phi3:latest");
    assert_eq!(settings.model_timeout(), Duration::from_secs(120));
    assert_eq!(settings.shell_timeout(), Duration::from_secs(10));
    assert_eq!(settings.fetch_timeout(), Duration::from_secs(10));
    assert!(settings
        .very_sensitive_keywords
        .contains(&"banking".to_string()));
    assert!(settings.validate().is_ok());
}

#[test]
fn config_settings_module_partial_yaml_fills_in_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("config.yaml");
    fs::write(&path, "model_name: llama3:8b\nshell_timeout_secs: 30\n").expect("write config");

    let settings = Settings::from_path(&path).expect("parse partial config");
    assert_eq!(settings.model_name, "llama3:8b");
    assert_eq!(settings.shell_timeout_secs, 30);
    assert_eq!(settings.model_endpoint, Settings::default().model_endpoint);
    assert_eq!(settings.model_timeout_secs, 120);
}

#[test]
fn config_settings_module_validate_rejects_bad_values() {
    let mut settings = Settings::default();
    settings.model_endpoint = "   ".to_string();
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::Invalid { .. })
    ));

    let mut settings = Settings::default();
    settings.model_timeout_secs = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.very_sensitive_keywords.push("  ".to_string());
    assert!(settings.validate().is_err());
}

#[test]
fn config_settings_module_save_round_trips_through_from_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nested").join("config.yaml");

    let mut settings = Settings::default();
    settings.model_name = "mistral:7b".to_string();
    settings.very_sensitive_keywords = vec!["vault".to_string()];
    settings.save(&path).expect("save config");

    let reloaded = Settings::from_path(&path).expect("reload config");
    assert_eq!(reloaded, settings);
}

#[test]
fn config_settings_module_missing_file_loads_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.yaml");

    let settings = load_settings_from(&path).expect("missing file falls back to defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn config_settings_module_corrupt_yaml_is_an_error_not_a_fallback() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("config.yaml");
    fs::write(&path, "model_timeout_secs: [not, a, number]\n").expect("write config");

    assert!(matches!(
        load_settings_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}
