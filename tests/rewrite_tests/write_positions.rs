//! Bindings and assignment targets are never replaced

use super::test_utils::rewrite_js;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_bindings_are_untouched() {
    let source = r#"
import { VERSION } from "./version";
import * as NODE_ENV from "./env";
let { a: API } = config;
const [DEBUG] = flags;
function VERSION_CHECK(VERSION, NODE_ENV = 1) {}
class API_CLIENT {}
const arrow = DEBUG => 1;
try {} catch (API) {}
export { VERSION };
"#;
    let config = json!({
        "VERSION": "1.2.3",
        "NODE_ENV": "production",
        "API": "https://api",
        "DEBUG": true,
        "VERSION_CHECK": 1,
        "API_CLIENT": 2
    });
    assert_eq!(rewrite_js(config, source), source);
}

#[test]
fn test_assignment_targets_are_untouched() {
    let source = "VERSION = 2; VERSION += 1; VERSION++; --VERSION; for (VERSION of list) {}";
    assert_eq!(rewrite_js(json!({"VERSION": "1.2.3"}), source), source);
}

#[test]
fn test_member_assignment_target_is_untouched() {
    let source = "process.env.NODE_ENV = \"test\"; process.env.NODE_ENV ||= \"dev\";";
    assert_eq!(
        rewrite_js(json!({"process.env.NODE_ENV": "production"}), source),
        source
    );
}

#[test]
fn test_reads_next_to_writes_are_replaced() {
    assert_eq!(
        rewrite_js(
            json!({"VERSION": "1.2.3"}),
            "let current = VERSION; current = VERSION;"
        ),
        "let current = \"1.2.3\"; current = \"1.2.3\";"
    );
}
