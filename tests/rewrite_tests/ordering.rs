//! Overlapping paths with the same dotted form

use super::test_utils::{defines, rewrite_output};
use define_rewriter::engine::{
    Language, PathOrdering, ResolveOptions, RewriteOptions, Rewriter,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn options(ordering: PathOrdering) -> RewriteOptions {
    RewriteOptions {
        resolve: ResolveOptions {
            ordering,
            ..ResolveOptions::default()
        },
        ..RewriteOptions::default()
    }
}

#[test]
fn test_first_enumerated_path_wins_in_both_modes() {
    for ordering in [PathOrdering::LongestFirst, PathOrdering::Enumeration] {
        let nested_first = json!({"a": {"b": "nested"}, "a.b": "literal"});
        assert_eq!(
            rewrite_output(nested_first, options(ordering), "x = a.b;").code,
            "x = \"nested\";",
            "{ordering:?}"
        );

        let literal_first = json!({"a.b": "literal", "a": {"b": "nested"}});
        assert_eq!(
            rewrite_output(literal_first, options(ordering), "x = a.b;").code,
            "x = \"literal\";",
            "{ordering:?}"
        );
    }
}

#[test]
fn test_command_line_defines_take_precedence() {
    let file = defines(json!({
        "VERSION": "from-file",
        "process": {"env": {"NODE_ENV": "production"}}
    }));
    let merged = file.with_overrides(vec![
        ("VERSION".to_string(), json!("from-cli")),
        ("process.env.NODE_ENV".to_string(), json!("test")),
    ]);
    let output = Rewriter::new(merged)
        .rewrite(
            "log(VERSION, process.env.NODE_ENV);",
            Path::new("app.js"),
            Language::JavaScript,
        )
        .unwrap();
    assert_eq!(output.code, "log(\"from-cli\", \"test\");");
}
