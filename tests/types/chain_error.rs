use goph_error::{ChainError, ErrorHandle, ErrorRef, ForeignError};
use std::io;

#[test]
fn base_error_is_its_own_root() {
    let err = ChainError::msg("disk full");

    assert!(err.unwrap().is_none());
    assert_eq!(err.message_stack(), "disk full");
    assert_eq!(err.depth(), 1);

    let root = err.unwrap_all();
    assert!(std::ptr::eq(root.as_chain().unwrap(), &err));
}

#[test]
fn default_message_is_empty() {
    let err = ChainError::from_cause(ForeignError::msg("boom"));
    assert_eq!(err.message(), "");
    assert_eq!(err.message_stack(), "boom\n");
}

#[test]
fn wrap_moves_foreign_cause_without_copying() {
    fn addr(e: &(dyn std::error::Error + Send + Sync + 'static)) -> *const () {
        e as *const _ as *const ()
    }

    let foreign = ForeignError::new(io::Error::other("reset"));
    let before = foreign.get_ref().map(addr);

    let err = ChainError::wrap::<(), _>(foreign, "reading").unwrap_err();
    let after = err
        .unwrap()
        .and_then(ErrorHandle::as_foreign)
        .and_then(ForeignError::get_ref)
        .map(addr);

    assert!(before.is_some());
    assert_eq!(before, after);
}

#[test]
fn wrap_moves_chain_cause_without_copying() {
    let inner = ChainError::from_cause(ForeignError::msg("root"));
    let root_before = inner.unwrap().map(|h| h as *const ErrorHandle);

    let outer = ChainError::wrap::<(), _>(inner, "outer").unwrap_err();
    let root_after = outer
        .unwrap()
        .and_then(ErrorHandle::as_chain)
        .and_then(ChainError::unwrap)
        .map(|h| h as *const ErrorHandle);

    assert_eq!(root_before, root_after);
}

#[test]
fn unwrap_returns_only_the_direct_cause() {
    let err = ChainError::new(
        "outer",
        Some(ChainError::new("middle", Some(ForeignError::msg("root").into())).into()),
    );

    let cause = err.unwrap().unwrap();
    assert!(cause.is_chain());
    assert_eq!(cause.message(), "middle");
    assert_eq!(cause.unwrap().map(ErrorHandle::message), Some("root"));
}

#[test]
fn unwrap_all_stops_at_chain_node_without_cause() {
    let err = ChainError::new("outer", Some(ChainError::msg("root node").into()));

    match err.unwrap_all() {
        ErrorRef::Chain(node) => assert_eq!(node.message(), "root node"),
        ErrorRef::Foreign(_) => panic!("root should be a chain node"),
    }
}

#[test]
fn message_stack_includes_terminal_foreign_message() {
    let err = ChainError::new(
        "saving",
        Some(ChainError::new("encoding", Some(io::Error::other("bad utf-8").into())).into()),
    );

    assert_eq!(err.message_stack(), "bad utf-8\nencoding\nsaving");
}

#[test]
fn chain_iterates_outermost_first() {
    let err = ChainError::new("c", Some(ChainError::new("b", Some(ChainError::msg("a").into())).into()));

    let messages: Vec<&str> = err.chain().map(ErrorRef::message).collect();
    assert_eq!(messages, ["c", "b", "a"]);
}

#[test]
fn into_root_returns_owned_foreign_error() {
    let err = ChainError::new("outer", Some(io::Error::other("root cause").into()));

    let root = err.into_root().into_foreign().unwrap();
    assert_eq!(root.message(), "root cause");
    assert!(root.downcast_ref::<io::Error>().is_some());
}

#[test]
fn into_root_of_terminal_node_is_itself() {
    let root = ChainError::msg("alone").into_root();
    assert!(root.is_chain());
    assert_eq!(root.message(), "alone");
}

#[test]
fn root_source_exposes_std_error() {
    let err = ChainError::new("outer", Some(io::Error::new(io::ErrorKind::NotFound, "gone").into()));

    let source = err.root_source().unwrap();
    assert_eq!(source.to_string(), "gone");

    let without_std = ChainError::new("outer", Some(ForeignError::msg("text only").into()));
    assert!(without_std.root_source().is_none());
}

#[test]
fn display_prints_message_and_alternate_prints_stack() {
    let err = ChainError::new("outer", Some(ChainError::msg("inner").into()));

    assert_eq!(format!("{err}"), "outer");
    assert_eq!(format!("{err:#}"), "inner\nouter");
}

#[test]
fn debug_shows_nested_structure() {
    let err = ChainError::new("outer", Some(ForeignError::msg("inner").into()));

    let debug = format!("{err:?}");
    assert!(debug.starts_with("ChainError"));
    assert!(debug.contains("outer"));
    assert!(debug.contains("Foreign"));
    assert!(debug.contains("inner"));
}

#[test]
fn debug_lists_causes_outermost_first() {
    let err = ChainError::new(
        "outer",
        Some(ChainError::new("middle", Some(ForeignError::msg("root").into())).into()),
    );

    assert_eq!(
        format!("{err:?}"),
        r#"ChainError { message: "outer", causes: [Chain("middle"), Foreign(ForeignError("root"))] }"#
    );
}

#[test]
fn new_takes_an_optional_handle() {
    let handle: ErrorHandle = io::Error::other("refused").into();
    let with_cause = ChainError::new("dialing", Some(handle));
    let without = ChainError::new("dialing", None);

    assert!(with_cause.unwrap().is_some_and(ErrorHandle::is_foreign));
    assert!(without.unwrap().is_none());
}

#[test]
fn deep_chain_traverses_and_drops_without_overflow() {
    let mut err = ChainError::msg("root");
    for _ in 0..200_000 {
        err = ChainError::from_cause(err);
    }

    assert_eq!(err.depth(), 200_001);
    assert_eq!(err.unwrap_all().message(), "root");
    drop(err);
}

#[test]
fn deep_chain_debug_does_not_recurse() {
    let mut err = ChainError::msg("root");
    for _ in 0..200_000 {
        err = ChainError::from_cause(err);
    }

    let debug = format!("{err:?}");
    assert!(debug.starts_with("ChainError { message: \"\", causes: ["));
    assert_eq!(debug.matches("Chain(").count(), 200_000);
    assert!(debug.ends_with("Chain(\"root\")] }"));
}
