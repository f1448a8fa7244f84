use tree_sitter::Node;

use super::is_write_position;
use crate::engine::comparator::{Candidate, Comparator};
use crate::engine::resolver::Replacement;
use crate::engine::{Context, Strategy};

/// Matches bare names against the flat keys of the configuration.
///
/// Shorthand properties (`{ VERSION }`) are candidates too; the rewriter
/// expands them to `VERSION: <literal>`.
pub struct IdentifierStrategy;

impl Default for IdentifierStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for IdentifierStrategy {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, _ctx: &Context<'a>) -> bool {
        match node.kind() {
            "identifier" => !is_write_position(node),
            "shorthand_property_identifier" => true,
            _ => false,
        }
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> Option<Replacement> {
        let name = ctx.get_node_text(node);
        ctx.table()
            .resolve(Comparator::Identifier, &Candidate::Identifier(name))
    }
}
