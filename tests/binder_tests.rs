//! Tests for parameter binding against declared handler signatures.

use rxroute::{HandlerSignature, Param};
use serde_json::{json, Value};
use std::collections::HashMap;

fn available(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_bind_resolves_values_by_name_in_declared_order() {
    let signature = HandlerSignature::new(vec![Param::required("b"), Param::required("a")]);
    let args = signature
        .bind(&available(&[("a", json!("1")), ("b", json!("2"))]))
        .unwrap();

    // Positional output follows the signature, not the map.
    assert_eq!(args.as_slice(), &[json!("2"), json!("1")]);
}

#[test]
fn test_missing_parameter_uses_declared_default() {
    let signature = HandlerSignature::new(vec![Param::with_default("limit", json!(10))]);
    let args = signature.bind(&available(&[])).unwrap();
    assert_eq!(args.as_slice(), &[json!(10)]);
}

#[test]
fn test_supplied_value_overrides_default() {
    let signature = HandlerSignature::new(vec![Param::with_default("limit", json!(10))]);
    let args = signature.bind(&available(&[("limit", json!("25"))])).unwrap();
    assert_eq!(args.as_slice(), &[json!("25")]);
}

#[test]
fn test_missing_nullable_parameter_resolves_to_null() {
    let signature = HandlerSignature::new(vec![Param::nullable("filter")]);
    let args = signature.bind(&available(&[])).unwrap();
    assert_eq!(args.as_slice(), &[Value::Null]);
}

#[test]
fn test_missing_required_parameter_fails_naming_it() {
    let signature = HandlerSignature::new(vec![Param::required("a"), Param::required("b")]);
    let err = signature.bind(&available(&[("b", json!("1"))])).unwrap_err();
    assert_eq!(err.parameter, "a");
    assert_eq!(err.to_string(), "a can't be null");
}

#[test]
fn test_explicit_null_for_required_parameter_fails() {
    let signature = HandlerSignature::new(vec![Param::required("a")]);
    let err = signature.bind(&available(&[("a", Value::Null)])).unwrap_err();
    assert_eq!(err.parameter, "a");
}

#[test]
fn test_no_type_coercion_is_performed() {
    // A string where the handler expects an integer is the handler's
    // concern; the binder passes it through untouched.
    let signature = HandlerSignature::new(vec![Param::required("n")]);
    let args = signature.bind(&available(&[("n", json!("111"))])).unwrap();
    assert_eq!(args.as_slice(), &[json!("111")]);
}

#[test]
fn test_empty_signature_binds_no_arguments() {
    let signature = HandlerSignature::empty();
    let args = signature.bind(&available(&[("ignored", json!(1))])).unwrap();
    assert!(args.is_empty());
}
