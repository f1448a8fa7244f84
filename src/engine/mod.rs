pub mod comparator;
pub mod context;
pub mod edit;
pub mod evaluate;
pub mod language;
pub mod operators;
pub mod paths;
pub mod resolver;
pub mod strategies;
pub mod value;

pub use comparator::{Candidate, Comparator};
pub use context::Context;
pub use edit::{Edit, EditKind, EditSet};
pub use language::{parse_source, Language};
pub use operators::{BinaryOp, UnaryOp};
pub use paths::{enumerate_paths, enumerate_paths_with, ConfigPath, PathOrdering, Traversable};
pub use resolver::{resolve_replacement, DefineTable, Replacement, ResolveOptions};
pub use value::JsValue;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};
use tree_sitter::Node;

use crate::config::Defines;
use crate::error::ParserError;
use strategies::{is_field, IdentifierStrategy, MemberChainStrategy, TypeofStrategy};
use value::render_literal;

const DEFAULT_MAX_DEPTH: usize = 1_000;

pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_handle<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> bool;
    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> Option<Replacement>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Fold the parent binary expression after a substitution.
    pub fold: bool,
    pub resolve: ResolveOptions,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            fold: true,
            resolve: ResolveOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteOutput {
    pub code: String,
    pub edits: Vec<Edit>,
}

impl RewriteOutput {
    pub fn is_changed(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn substitution_count(&self) -> usize {
        self.edits.iter().filter(|e| !e.is_fold()).count()
    }

    pub fn fold_count(&self) -> usize {
        self.edits.iter().filter(|e| e.is_fold()).count()
    }
}

pub struct Rewriter {
    table: DefineTable,
    strategies: Vec<Box<dyn Strategy>>,
    options: RewriteOptions,
    max_depth: usize,
}

impl Rewriter {
    pub fn new(defines: Defines) -> Self {
        Self::builder(defines).build()
    }

    /// Returns the default strategy chain. Order matters: the first strategy
    /// that can handle a node decides it.
    fn default_strategies() -> Vec<Box<dyn Strategy>> {
        vec![
            Box::new(MemberChainStrategy::new()),
            Box::new(IdentifierStrategy::new()),
            Box::new(TypeofStrategy::new()),
        ]
    }

    pub fn builder(defines: Defines) -> RewriterBuilder {
        RewriterBuilder::new(defines)
    }

    pub fn table(&self) -> &DefineTable {
        &self.table
    }

    pub fn options(&self) -> RewriteOptions {
        self.options
    }

    /// Rewrites one source file. Fails only when the source does not parse.
    pub fn rewrite(
        &self,
        source: &str,
        path: &Path,
        language: Language,
    ) -> Result<RewriteOutput, ParserError> {
        let tree = parse_source(source, language, path)?;
        let ctx = Context::new(source.as_bytes(), path, language, &self.table);

        if !self.table.defines().is_empty() {
            self.visit(tree.root_node(), &ctx, 0);
        }

        let edits = ctx.take_edits();
        let code = edits.apply(source);
        let output = RewriteOutput {
            code,
            edits: edits.into_vec(),
        };
        debug!(
            path = %path.display(),
            substitutions = output.substitution_count(),
            folds = output.fold_count(),
            "rewrote source"
        );
        Ok(output)
    }

    fn visit<'a>(&self, node: Node<'a>, ctx: &Context<'a>, depth: usize) {
        if depth > self.max_depth {
            trace!(
                file = %ctx.file_path().display(),
                language = ctx.language().name(),
                line = node.start_position().row + 1,
                "max depth reached"
            );
            return;
        }

        if ctx.is_edited(&node) {
            return;
        }

        if self.try_strategies(&node, ctx) {
            return;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, ctx, depth + 1);
        }
    }

    /// Returns true when the node was substituted.
    fn try_strategies<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> bool {
        for strategy in &self.strategies {
            if strategy.can_handle(node, ctx) {
                let Some(replacement) = strategy.resolve(node, ctx) else {
                    return false;
                };
                self.substitute(node, replacement, strategy.name(), ctx);
                return true;
            }
        }
        false
    }

    fn substitute<'a>(
        &self,
        node: &Node<'a>,
        replacement: Replacement,
        strategy: &'static str,
        ctx: &Context<'a>,
    ) {
        let original = ctx.get_node_text(node);
        let mut literal = render_literal(&replacement.value);
        if needs_parens(node, &literal) {
            literal = format!("({literal})");
        }
        if node.kind() == "shorthand_property_identifier" {
            literal = format!("{original}: {literal}");
        }

        let path = replacement.path.dotted().to_string();
        debug!(
            strategy,
            path = %path,
            file = %ctx.file_path().display(),
            line = node.start_position().row + 1,
            "substituted {original} with {literal}"
        );

        ctx.record_edit(Edit::for_node(
            node,
            original,
            literal,
            EditKind::Substitution { path },
            JsValue::from_json(&replacement.value),
        ));

        if self.options.fold {
            self.fold_parent(node, ctx);
        }
    }

    /// One step of constant folding on the binary expression directly
    /// around a substituted node, looking through parentheses.
    fn fold_parent<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) {
        let mut parent = node.parent();
        while let Some(p) = parent.filter(|p| p.kind() == "parenthesized_expression") {
            parent = p.parent();
        }
        let Some(parent) = parent.filter(|p| p.kind() == "binary_expression") else {
            return;
        };

        let foldable = parent
            .child_by_field_name("operator")
            .and_then(|op| BinaryOp::parse(op.kind()))
            .is_some_and(|op| op.is_foldable());
        if !foldable {
            return;
        }

        let Some(value) = evaluate::evaluate(&parent, ctx) else {
            trace!(
                file = %ctx.file_path().display(),
                line = parent.start_position().row + 1,
                "parent expression not confident"
            );
            return;
        };

        let original = ctx.get_node_text(&parent);
        let mut literal = value.render();
        if needs_parens(&parent, &literal) {
            literal = format!("({literal})");
        }
        debug!(
            file = %ctx.file_path().display(),
            line = parent.start_position().row + 1,
            "folded {original} to {literal}"
        );
        ctx.record_edit(Edit::for_node(
            &parent,
            original,
            literal,
            EditKind::Fold,
            Some(value),
        ));
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

/// Whether `literal` must be parenthesised to stand where `node` stood.
fn needs_parens(node: &Node, literal: &str) -> bool {
    // `{` at statement or arrow-body start would open a block.
    if literal.starts_with('{') {
        return true;
    }

    let negative = literal.starts_with('-');
    let numeric = negative || literal.starts_with(|c: char| c.is_ascii_digit());
    if !numeric {
        return false;
    }

    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        // `1.toFixed()` does not parse.
        "member_expression" | "subscript_expression" => is_field(&parent, "object", node),
        "unary_expression" | "update_expression" | "binary_expression" => negative,
        "call_expression" => negative && is_field(&parent, "function", node),
        "new_expression" => negative && is_field(&parent, "constructor", node),
        _ => false,
    }
}

pub struct RewriterBuilder {
    defines: Defines,
    strategies: Vec<Box<dyn Strategy>>,
    options: RewriteOptions,
    max_depth: usize,
    include_defaults: bool,
}

impl RewriterBuilder {
    pub fn new(defines: Defines) -> Self {
        Self {
            defines,
            strategies: Vec::new(),
            options: RewriteOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            include_defaults: true,
        }
    }

    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    pub fn build(mut self) -> Rewriter {
        if self.include_defaults && self.strategies.is_empty() {
            self.strategies = Rewriter::default_strategies();
        }

        Rewriter {
            table: DefineTable::new(self.defines, self.options.resolve),
            strategies: self.strategies,
            options: self.options,
            max_depth: self.max_depth,
        }
    }
}
