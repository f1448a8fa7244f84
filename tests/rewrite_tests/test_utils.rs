//! Shared helpers for rewrite tests

use std::path::Path;

use define_rewriter::engine::{Language, RewriteOptions, RewriteOutput, Rewriter};
use define_rewriter::Defines;
use serde_json::Value;

pub fn defines(config: Value) -> Defines {
    Defines::from_value(config).unwrap()
}

pub fn rewriter_with(config: Value, options: RewriteOptions) -> Rewriter {
    Rewriter::builder(defines(config))
        .with_options(options)
        .build()
}

/// Rewrite JavaScript source and return the full output
pub fn rewrite_output(config: Value, options: RewriteOptions, source: &str) -> RewriteOutput {
    rewriter_with(config, options)
        .rewrite(source, Path::new("test.js"), Language::JavaScript)
        .unwrap()
}

/// Rewrite JavaScript source with default options
pub fn rewrite_js(config: Value, source: &str) -> String {
    rewrite_output(config, RewriteOptions::default(), source).code
}

pub fn rewrite_ts(config: Value, source: &str) -> String {
    Rewriter::new(defines(config))
        .rewrite(source, Path::new("test.ts"), Language::TypeScript)
        .unwrap()
        .code
}

pub fn rewrite_tsx(config: Value, source: &str) -> String {
    Rewriter::new(defines(config))
        .rewrite(source, Path::new("test.tsx"), Language::Tsx)
        .unwrap()
        .code
}
