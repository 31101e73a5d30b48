mod common;

use std::error::Error;
use std::rc::Rc;

use common::{Widget, valid_widget};
use draftsmith_core::{Builder, EngineConfig};

#[test]
fn strict_extraction_returns_valid_draft() {
    let w = valid_widget().extract_or_abort();
    assert_eq!(w.name, "sprocket");
}

#[test]
#[should_panic(expected = "Widget failed validation")]
fn strict_extraction_aborts_on_structural_failure() {
    let _ = Builder::<Widget>::new().extract_or_abort();
}

#[test]
#[should_panic(expected = "custom validation failed: no")]
fn strict_extraction_aborts_on_custom_failure() {
    let _ = valid_widget()
        .with_validator(|_| Err("no".into()))
        .extract_or_abort();
}

#[test]
fn abort_signal_carries_entity_and_cause() {
    let abort = valid_widget()
        .labelled("fixture-widget")
        .set(|w| &mut w.count, 0u32)
        .try_extract_or_abort()
        .unwrap_err();

    assert_eq!(abort.entity, "fixture-widget");
    assert!(abort.source.mentions("Count"));
    assert!(abort.source().is_some());
    assert!(abort.to_string().starts_with("invalid draft: fixture-widget"));
}

#[test]
fn abort_message_comes_from_config() {
    let config = EngineConfig {
        abort_message: "broken fixture".into(),
        ..EngineConfig::default()
    };
    let abort = Builder::<Widget>::configured(Rc::new(config))
        .try_extract_or_abort()
        .unwrap_err();
    assert!(abort.to_string().starts_with("broken fixture: Widget failed validation"));
}
