//! Constructor-family tests swept across every registered 4xx/5xx code.

use httperr::{registry, Error, HttpError};
use serde_json::json;
use std::collections::HashMap;

/// Every registered status code in the error range.
fn error_codes() -> impl Iterator<Item = u16> {
    (400u16..600).filter(|code| registry::is_known(*code))
}

/// The name the factory is expected to derive for `code`.
fn expected_name(code: u16) -> String {
    let name = registry::short_name(code).unwrap();
    if name.ends_with("Error") {
        name.to_string()
    } else {
        format!("{}Error", name)
    }
}

fn sample_properties() -> HashMap<String, serde_json::Value> {
    HashMap::from([
        ("year".to_string(), json!(2020)),
        ("state".to_string(), json!("quarantine at home")),
    ])
}

#[test]
fn test_defaults_for_every_error_code() {
    for code in error_codes() {
        let err = HttpError::new(code).unwrap();

        assert_eq!(err.status(), code);
        assert_eq!(err.expose(), code < 500, "expose wrong for {}", code);
        assert_eq!(err.message(), registry::reason_phrase(code).unwrap());
        assert_eq!(err.name(), expected_name(code));
        assert!(err.name().ends_with("Error"));
        assert!(!err.name().ends_with("ErrorError"), "doubled suffix for {}", code);
    }
}

#[test]
fn test_explicit_message_for_every_error_code() {
    for code in error_codes() {
        let err = HttpError::with_message(code, "operation failed").unwrap();

        assert_eq!(err.status(), code);
        assert_eq!(err.expose(), code < 500);
        assert_eq!(err.message(), "operation failed");
        assert_eq!(err.name(), expected_name(code));
    }
}

#[test]
fn test_message_and_properties_for_every_error_code() {
    for code in error_codes() {
        let err = HttpError::builder(code)
            .message("operation failed")
            .properties(sample_properties())
            .build()
            .unwrap();

        assert_eq!(err.status(), code);
        assert_eq!(err.message(), "operation failed");
        assert_eq!(err.name(), expected_name(code));
        assert_eq!(err.property("year"), Some(&json!(2020)));
        assert_eq!(err.property("state"), Some(&json!("quarantine at home")));
    }
}

#[test]
fn test_properties_only_for_every_error_code() {
    for code in error_codes() {
        let err = HttpError::with_properties(code, sample_properties()).unwrap();

        assert_eq!(err.status(), code);
        assert_eq!(err.message(), registry::reason_phrase(code).unwrap());
        assert_eq!(err.property("year"), Some(&json!(2020)));
        assert_eq!(err.property("state"), Some(&json!("quarantine at home")));
    }
}

#[test]
fn test_status_property_never_overrides_the_code() {
    let props = HashMap::from([("status".to_string(), json!(200))]);
    let err = HttpError::with_properties(404, props).unwrap();

    assert_eq!(err.status(), 404);
    assert!(err.property("status").is_none());
}

#[test]
fn test_unknown_status_code() {
    let err = HttpError::new(3000).unwrap_err();

    assert_eq!(err, Error::UnknownStatus(3000));
    assert_eq!(err.to_string(), "unknown HTTP status code `3000`");
}

#[test]
fn test_registered_code_outside_error_range() {
    let err = HttpError::new(200).unwrap_err();

    assert_eq!(err, Error::NonErrorStatus(200));
    assert_eq!(
        err.to_string(),
        "only 4xx or 5xx status codes allowed, but got `200`"
    );
}

#[test]
fn test_every_instance_is_an_error_value() {
    for code in error_codes() {
        let err = HttpError::new(code).unwrap();
        let dyn_err: &dyn std::error::Error = &err;

        assert!(!dyn_err.to_string().is_empty());
        assert!(err.name().ends_with("Error"));
    }
}
