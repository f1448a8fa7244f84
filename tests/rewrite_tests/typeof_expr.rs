//! `typeof` expression tests

use super::test_utils::rewrite_js;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_typeof_replaced_with_configured_string() {
    assert_eq!(
        rewrite_js(
            json!({"typeof window": "undefined"}),
            "const kind = typeof window;"
        ),
        "const kind = \"undefined\";"
    );
}

#[test]
fn test_typeof_guard_folds() {
    assert_eq!(
        rewrite_js(
            json!({"typeof window": "undefined"}),
            "if (typeof window !== \"undefined\") { mount(); }"
        ),
        "if (false) { mount(); }"
    );
}

#[test]
fn test_typeof_member_chain() {
    assert_eq!(
        rewrite_js(
            json!({"typeof process.browser": "boolean"}),
            "const t = typeof process.browser;"
        ),
        "const t = \"boolean\";"
    );
}

#[test]
fn test_unconfigured_typeof_is_untouched() {
    let source = "const kind = typeof document;";
    assert_eq!(rewrite_js(json!({"typeof window": "undefined"}), source), source);
}

#[test]
fn test_typeof_key_does_not_replace_plain_reads() {
    let source = "window.location.reload();";
    assert_eq!(rewrite_js(json!({"typeof window": "undefined"}), source), source);
}

#[test]
fn test_typeof_of_replaced_identifier_is_not_a_typeof_match() {
    // Without a `typeof window` key the operand itself is still a candidate.
    assert_eq!(
        rewrite_js(json!({"window": "w"}), "const t = typeof window;"),
        "const t = typeof \"w\";"
    );
}
