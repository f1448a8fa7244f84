//! TypeScript and TSX sources

use super::test_utils::{rewrite_ts, rewrite_tsx};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_typescript_member_chain() {
    assert_eq!(
        rewrite_ts(
            json!({"process": {"env": {"NODE_ENV": "production"}}}),
            "const mode: string = process.env.NODE_ENV;"
        ),
        "const mode: string = \"production\";"
    );
}

#[test]
fn test_typed_parameter_is_a_binding() {
    assert_eq!(
        rewrite_ts(
            json!({"VERSION": "1.2.3"}),
            "function show(VERSION: string): string { return VERSION; }"
        ),
        "function show(VERSION: string): string { return \"1.2.3\"; }"
    );
}

#[test]
fn test_type_query_is_not_an_expression() {
    assert_eq!(
        rewrite_ts(json!({"window": "w"}), "let w: typeof window = window;"),
        "let w: typeof window = \"w\";"
    );
}

#[test]
fn test_tsx_expression_container() {
    assert_eq!(
        rewrite_tsx(
            json!({"VERSION": "1.2.3"}),
            "const el = <footer>{VERSION}</footer>;"
        ),
        "const el = <footer>{\"1.2.3\"}</footer>;"
    );
}
