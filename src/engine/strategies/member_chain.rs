use tree_sitter::Node;

use super::is_write_position;
use crate::engine::comparator::{Candidate, Comparator};
use crate::engine::resolver::Replacement;
use crate::engine::{Context, Strategy};
use crate::utils::decode_js_string;

/// Matches property-access chains such as `process.env.NODE_ENV` or
/// `process.env["NODE_ENV"]` against the full configuration.
pub struct MemberChainStrategy;

impl Default for MemberChainStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberChainStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Flattens the chain into one segment per link, root first.
    ///
    /// Optional links, private fields, `super` and computed indices other
    /// than plain string literals make the chain dynamic.
    pub fn chain_segments<'a>(node: &Node<'a>, ctx: &Context<'a>) -> Option<Vec<String>> {
        // Walked iteratively: chains can be arbitrarily long.
        let mut segments = Vec::new();
        let mut current = *node;
        loop {
            match current.kind() {
                "identifier" => {
                    segments.push(ctx.get_node_text(&current));
                    break;
                }
                "this" => {
                    segments.push("this".to_string());
                    break;
                }
                "member_expression" => {
                    if has_optional_chain(&current) {
                        return None;
                    }
                    let property = current.child_by_field_name("property")?;
                    if property.kind() != "property_identifier" {
                        return None;
                    }
                    segments.push(ctx.get_node_text(&property));
                    current = current.child_by_field_name("object")?;
                }
                "subscript_expression" => {
                    if has_optional_chain(&current) {
                        return None;
                    }
                    let index = current.child_by_field_name("index")?;
                    if index.kind() != "string" {
                        return None;
                    }
                    segments.push(decode_js_string(&ctx.get_node_text(&index))?);
                    current = current.child_by_field_name("object")?;
                }
                _ => return None,
            }
        }
        segments.reverse();
        Some(segments)
    }
}

fn has_optional_chain(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| child.kind() == "optional_chain");
    found
}

impl Strategy for MemberChainStrategy {
    fn name(&self) -> &'static str {
        "member_chain"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, _ctx: &Context<'a>) -> bool {
        matches!(node.kind(), "member_expression" | "subscript_expression")
            && !is_write_position(node)
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> Option<Replacement> {
        let segments = Self::chain_segments(node, ctx)?;
        ctx.table()
            .resolve(Comparator::MemberChain, &Candidate::MemberChain(segments))
    }
}
