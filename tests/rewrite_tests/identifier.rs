//! Bare identifier tests

use super::test_utils::{rewrite_js, rewrite_output};
use define_rewriter::engine::{ResolveOptions, RewriteOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_identifier_replaced_with_string() {
    assert_eq!(
        rewrite_js(json!({"VERSION": "1.2.3"}), "console.log(VERSION);"),
        "console.log(\"1.2.3\");"
    );
}

#[test]
fn test_literal_rendering() {
    let config = json!({
        "RETRIES": 3,
        "DEBUG": true,
        "RATE": 0.5,
        "TAGS": ["a", "b"],
        "FEATURES": {"dark-mode": true, "beta": false},
        "MSG": "say \"hi\"\n"
    });
    assert_eq!(
        rewrite_js(config, "f(RETRIES, DEBUG, RATE, TAGS, FEATURES, MSG);"),
        "f(3, true, 0.5, [\"a\", \"b\"], ({ \"dark-mode\": true, beta: false }), \"say \\\"hi\\\"\\n\");"
    );
}

#[test]
fn test_negative_number_is_parenthesised_under_unary() {
    assert_eq!(
        rewrite_js(json!({"OFFSET": -5}), "x = OFFSET; y = -OFFSET;"),
        "x = -5; y = -(-5);"
    );
}

#[test]
fn test_falsy_values_are_not_substituted() {
    let config = json!({"ZERO": 0, "OFF": false, "EMPTY": "", "NOTHING": null});
    let source = "f(ZERO, OFF, EMPTY, NOTHING);";
    let output = rewrite_output(config, RewriteOptions::default(), source);
    assert_eq!(output.code, source);
    assert!(!output.is_changed());
}

#[test]
fn test_allow_falsy_substitutes_falsy_values() {
    let config = json!({"ZERO": 0, "OFF": false, "EMPTY": "", "NOTHING": null});
    let options = RewriteOptions {
        resolve: ResolveOptions {
            allow_falsy: true,
            ..ResolveOptions::default()
        },
        ..RewriteOptions::default()
    };
    assert_eq!(
        rewrite_output(config, options, "f(ZERO, OFF, EMPTY, NOTHING);").code,
        "f(0, false, \"\", null);"
    );
}

#[test]
fn test_shorthand_property_is_expanded() {
    assert_eq!(
        rewrite_js(json!({"VERSION": "1.2.3"}), "const info = { VERSION, name };"),
        "const info = { VERSION: \"1.2.3\", name };"
    );
}

#[test]
fn test_property_names_are_not_identifiers() {
    let source = "obj.VERSION; const o = { VERSION: 1 };";
    assert_eq!(rewrite_js(json!({"VERSION": "1.2.3"}), source), source);
}

#[test]
fn test_nested_keys_are_not_reachable_by_bare_name() {
    let source = "log(NODE_ENV);";
    assert_eq!(
        rewrite_js(json!({"process": {"env": {"NODE_ENV": "production"}}}), source),
        source
    );
}

#[test]
fn test_shadowing_is_not_considered() {
    // Only the declaration name is protected; later reads are replaced.
    assert_eq!(
        rewrite_js(
            json!({"VERSION": "1.2.3"}),
            "function show(v) { let VERSION = v; return VERSION; }"
        ),
        "function show(v) { let VERSION = v; return \"1.2.3\"; }"
    );
}

#[test]
fn test_every_occurrence_is_replaced() {
    let output = rewrite_output(
        json!({"API": "https://api.example.com"}),
        RewriteOptions::default(),
        "fetch(API); fetch(API + \"/users\");",
    );
    assert_eq!(
        output.code,
        "fetch(\"https://api.example.com\"); fetch(\"https://api.example.com/users\");"
    );
    assert_eq!(output.substitution_count(), 1);
    assert_eq!(output.fold_count(), 1);
}
