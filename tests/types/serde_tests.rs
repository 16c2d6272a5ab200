use goph_error::{ChainError, ErrorHandle, ForeignError};
use serde_json::json;

#[test]
fn chain_serializes_as_flat_message_list() {
    let err = ChainError::new(
        "outer",
        Some(ChainError::new("inner", Some(ForeignError::msg("root").into())).into()),
    );

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value, json!({ "messages": ["outer", "inner"], "foreign": "root" }));
}

#[test]
fn chain_without_foreign_root_serializes_null() {
    let err = ChainError::new("saving", Some(ChainError::msg("encoding").into()));

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value, json!({ "messages": ["saving", "encoding"], "foreign": null }));
}

#[test]
fn foreign_error_keeps_only_its_message() {
    let err = ForeignError::new(std::io::Error::other("disk"));
    let text = serde_json::to_string(&err).unwrap();
    assert_eq!(text, "\"disk\"");

    let back: ForeignError = serde_json::from_str(&text).unwrap();
    assert_eq!(back.message(), "disk");
    assert!(back.get_ref().is_none());
}

#[test]
fn deserialized_chain_renders_same_stack() {
    let err = ChainError::new("saving", Some(ChainError::msg("encoding").into()));
    let text = serde_json::to_string(&err).unwrap();

    let back: ChainError = serde_json::from_str(&text).unwrap();
    assert_eq!(back.message_stack(), err.message_stack());
    assert!(back.unwrap_all().is_chain());
}

#[test]
fn deep_chain_round_trips() {
    let mut err = ChainError::msg("level 0");
    for level in 1..2_000 {
        err = ChainError::new(format!("level {level}"), Some(err.into()));
    }
    let err = ChainError::new("top", Some(err.into()));

    let text = serde_json::to_string(&err).unwrap();
    let back: ChainError = serde_json::from_str(&text).unwrap();

    assert_eq!(back.depth(), 2_001);
    assert_eq!(back.unwrap_all().message(), "level 0");
    assert_eq!(back.message_stack(), err.message_stack());
}

#[test]
fn deep_chain_with_foreign_root_round_trips() {
    let mut err = ChainError::from_cause(ForeignError::msg("socket closed"));
    for _ in 0..1_000 {
        err = ChainError::from_cause(err);
    }

    let back: ChainError = serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
    assert_eq!(back.depth(), 1_002);
    assert!(back.unwrap_all().is_foreign());
    assert_eq!(back.unwrap_all().message(), "socket closed");
}

#[test]
fn empty_message_list_is_rejected() {
    let result = serde_json::from_str::<ChainError>(r#"{ "messages": [] }"#);
    assert!(result.is_err());
}

#[test]
fn missing_foreign_defaults_to_none() {
    let back: ErrorHandle =
        serde_json::from_str(r#"{ "chain": { "messages": ["alone"] } }"#).unwrap();
    assert!(back.unwrap().is_none());
    assert_eq!(back.message(), "alone");
}

#[test]
fn foreign_handle_is_tagged() {
    let handle: ErrorHandle = ForeignError::msg("leaf").into();
    assert_eq!(serde_json::to_value(&handle).unwrap(), json!({ "foreign": "leaf" }));
}
