//! Property-access chain tests

use super::test_utils::{defines, rewrite_js};
use define_rewriter::engine::{EditKind, Language, Rewriter};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn node_env() -> serde_json::Value {
    json!({"process": {"env": {"NODE_ENV": "production"}}})
}

#[test]
fn test_nested_config_replaces_chain() {
    assert_eq!(
        rewrite_js(node_env(), "const mode = process.env.NODE_ENV;"),
        "const mode = \"production\";"
    );
}

#[test]
fn test_string_subscript_is_a_chain_link() {
    assert_eq!(
        rewrite_js(node_env(), "const mode = process.env[\"NODE_ENV\"];"),
        "const mode = \"production\";"
    );
    assert_eq!(
        rewrite_js(node_env(), "const mode = process['env'].NODE_ENV;"),
        "const mode = \"production\";"
    );
}

#[test]
fn test_flat_dotted_key() {
    assert_eq!(
        rewrite_js(
            json!({"process.env.NODE_ENV": "development"}),
            "if (process.env.NODE_ENV) start();"
        ),
        "if (\"development\") start();"
    );
}

#[test]
fn test_intermediate_object_is_replaced() {
    assert_eq!(
        rewrite_js(node_env(), "const env = process.env;"),
        "const env = ({ NODE_ENV: \"production\" });"
    );
    assert_eq!(
        rewrite_js(node_env(), "process.env.OTHER;"),
        "({ NODE_ENV: \"production\" }).OTHER;"
    );
}

#[test]
fn test_array_element_through_string_index() {
    let config = json!({"APP": {"ports": [80, 443]}});
    assert_eq!(rewrite_js(config.clone(), "listen(APP.ports[\"1\"]);"), "listen(443);");
    assert_eq!(rewrite_js(config, "listen(APP.ports[0]);"), "listen([80, 443][0]);");
}

#[test]
fn test_this_rooted_chain() {
    assert_eq!(
        rewrite_js(json!({"this": {"debug": true}}), "if (this.debug) log();"),
        "if (true) log();"
    );
}

#[test]
fn test_dynamic_chains_are_left_alone() {
    let config = json!({"process.env.NODE_ENV": "production"});
    for source in [
        "process.env[key];",
        "process?.env.NODE_ENV;",
        "process.env?.NODE_ENV;",
        "getProcess().env.NODE_ENV;",
    ] {
        assert_eq!(rewrite_js(config.clone(), source), source);
    }
}

#[test]
fn test_unconfigured_chain_is_untouched() {
    let source = "const home = process.env.HOME;";
    assert_eq!(
        rewrite_js(json!({"process.env.NODE_ENV": "production"}), source),
        source
    );
}

#[test]
fn test_edit_reports_matched_path() {
    let rewriter = Rewriter::new(defines(node_env()));
    let output = rewriter
        .rewrite(
            "let a = 1;\nlet m = process.env.NODE_ENV;",
            Path::new("app.js"),
            Language::JavaScript,
        )
        .unwrap();
    assert_eq!(output.edits.len(), 1);
    let edit = &output.edits[0];
    assert_eq!(
        edit.kind,
        EditKind::Substitution {
            path: "process.env.NODE_ENV".to_string()
        }
    );
    assert_eq!(edit.original, "process.env.NODE_ENV");
    assert_eq!(edit.replacement, "\"production\"");
    assert_eq!((edit.line, edit.column), (2, 9));
}

#[test]
fn test_rewriting_does_not_mutate_config() {
    let rewriter = Rewriter::new(defines(node_env()));
    let _ = rewriter
        .rewrite(
            "process.env.NODE_ENV; process.env;",
            Path::new("app.js"),
            Language::JavaScript,
        )
        .unwrap();
    assert_eq!(rewriter.table().defines().as_value(), &node_env());
}

#[test]
fn test_very_long_chain_is_left_alone() {
    let chain = format!("a{}", ".b".repeat(50_000));
    let source = format!("{chain};\nlog(VERSION);");
    let rewriter = Rewriter::builder(defines(json!({"VERSION": "1.2.3"})))
        .with_max_depth(16)
        .build();
    let output = rewriter
        .rewrite(&source, Path::new("long.js"), Language::JavaScript)
        .unwrap();
    assert_eq!(output.code, format!("{chain};\nlog(\"1.2.3\");"));
}
