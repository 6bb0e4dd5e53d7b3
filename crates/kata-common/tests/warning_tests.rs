//! Tests for the deduplicated warning channel.

use kata_common::warning::{warn_once, was_warned};

#[test]
fn test_warning_is_recorded() {
    warn_once("Test", "recorded once");
    assert!(was_warned("Test", "recorded once"));
}

#[test]
fn test_warning_keyed_by_component() {
    warn_once("Alpha", "shared message");
    assert!(was_warned("Alpha", "shared message"));
    assert!(!was_warned("Beta", "shared message"));
}

#[test]
fn test_repeated_warning_is_idempotent() {
    warn_once("Test", "repeated");
    warn_once("Test", "repeated");
    assert!(was_warned("Test", "repeated"));
}

#[test]
fn test_unknown_warning_not_recorded() {
    assert!(!was_warned("Test", "never emitted"));
}
