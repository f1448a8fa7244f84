//! Single-step folding of the expression around a substitution

use super::test_utils::{rewrite_js, rewrite_output};
use define_rewriter::engine::{EditKind, RewriteOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_equality_check_collapses_to_boolean() {
    assert_eq!(
        rewrite_js(
            json!({"NODE_ENV": "production"}),
            "if (NODE_ENV === \"production\") { enableCache(); }"
        ),
        "if (true) { enableCache(); }"
    );
}

#[test]
fn test_both_operands_substituted() {
    let output = rewrite_output(
        json!({"A": "x", "B": "x"}),
        RewriteOptions::default(),
        "const same = A === B;",
    );
    assert_eq!(output.code, "const same = true;");
    assert_eq!(output.edits.len(), 1);
    assert_eq!(output.edits[0].kind, EditKind::Fold);
    assert_eq!(output.edits[0].original, "A === B");
}

#[test]
fn test_arithmetic_and_comparison() {
    let config = json!({"WIDTH": 100, "VERSION": "1.2.3"});
    assert_eq!(rewrite_js(config.clone(), "const half = WIDTH / 2;"), "const half = 50;");
    assert_eq!(rewrite_js(config.clone(), "const big = (WIDTH) > 50;"), "const big = true;");
    assert_eq!(
        rewrite_js(config, "const newer = VERSION > \"1.0.0\";"),
        "const newer = true;"
    );
}

#[test]
fn test_loose_equality_uses_js_coercion() {
    assert_eq!(
        rewrite_js(json!({"PORT": "8080"}), "const std = PORT == 8080;"),
        "const std = true;"
    );
    assert_eq!(
        rewrite_js(json!({"PORT": "8080"}), "const std = PORT === 8080;"),
        "const std = false;"
    );
}

#[test]
fn test_not_confident_keeps_substitution() {
    assert_eq!(
        rewrite_js(json!({"NODE_ENV": "production"}), "const ok = NODE_ENV === mode;"),
        "const ok = \"production\" === mode;"
    );
}

#[test]
fn test_non_finite_result_is_not_folded() {
    assert_eq!(
        rewrite_js(json!({"WIDTH": 100}), "const x = WIDTH / 0;"),
        "const x = 100 / 0;"
    );
}

#[test]
fn test_negative_zero_keeps_its_sign() {
    let config = json!({"M": -5});
    assert_eq!(rewrite_js(config.clone(), "x = M * 0;"), "x = -0;");
    assert_eq!(rewrite_js(config, "y = M * 0 - 1;"), "y = (-0) - 1;");
}

#[test]
fn test_logical_operators_are_not_folded() {
    assert_eq!(
        rewrite_js(json!({"DEBUG": true}), "const x = DEBUG && init();"),
        "const x = true && init();"
    );
}

#[test]
fn test_only_the_immediate_parent_is_folded() {
    assert_eq!(
        rewrite_js(json!({"WIDTH": 100}), "const x = WIDTH + 1 + y;"),
        "const x = 101 + y;"
    );
    assert_eq!(
        rewrite_js(
            json!({"NODE_ENV": "production"}),
            "if (!(NODE_ENV === \"production\")) {}"
        ),
        "if (!(true)) {}"
    );
}

#[test]
fn test_folded_number_keeps_parentheses_for_member_access() {
    assert_eq!(
        rewrite_js(json!({"A": 1}), "const s = (A + 1).toString();"),
        "const s = (2).toString();"
    );
}

#[test]
fn test_folding_can_be_disabled() {
    let options = RewriteOptions {
        fold: false,
        ..RewriteOptions::default()
    };
    let output = rewrite_output(
        json!({"NODE_ENV": "production"}),
        options,
        "if (NODE_ENV === \"production\") {}",
    );
    assert_eq!(output.code, "if (\"production\" === \"production\") {}");
    assert_eq!(output.fold_count(), 0);
}
