use draftsmith_core::{ConfigError, EngineConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.custom_prefix.as_deref(), Some("custom validation failed"));
    assert!(config.log_failures);
    assert_eq!(config.abort_message, "invalid draft");
}

#[test]
fn empty_text_yields_defaults() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn parses_all_keys() {
    let config = EngineConfig::from_toml_str(
        r#"
        custom_prefix = "rejected"
        log_failures = false
        abort_message = "fixture is broken"
        "#,
    )
    .unwrap();

    assert_eq!(config.custom_prefix.as_deref(), Some("rejected"));
    assert!(!config.log_failures);
    assert_eq!(config.abort_message, "fixture is broken");
}

#[test]
fn partial_text_keeps_other_defaults() {
    let config = EngineConfig::from_toml_str("log_failures = false").unwrap();
    assert!(!config.log_failures);
    assert_eq!(config.abort_message, "invalid draft");
}

#[test]
fn malformed_text_is_an_error() {
    let err = EngineConfig::from_toml_str("log_failures = \"sometimes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("config parse error"));
}

#[test]
fn lenient_parse_falls_back_to_defaults() {
    let config = EngineConfig::from_toml_or_default("this is = = not toml");
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn verbatim_drops_prefix_only() {
    let config = EngineConfig::verbatim();
    assert!(config.custom_prefix.is_none());
    assert!(config.log_failures);
}

#[test]
fn round_trips_through_toml() {
    let config = EngineConfig {
        custom_prefix: Some("p".into()),
        log_failures: false,
        abort_message: "m".into(),
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
}
