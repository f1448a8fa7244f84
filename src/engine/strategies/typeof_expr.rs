use tree_sitter::Node;

use super::member_chain::MemberChainStrategy;
use crate::config::TYPEOF_PREFIX;
use crate::engine::comparator::{Candidate, Comparator};
use crate::engine::paths::ConfigPath;
use crate::engine::resolver::{resolve_replacement, Replacement};
use crate::engine::{Context, Strategy};

/// Matches `typeof <name>` against configuration keys spelled `typeof <name>`.
pub struct TypeofStrategy;

impl Default for TypeofStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeofStrategy {
    pub fn new() -> Self {
        Self
    }

    fn argument<'a>(node: &Node<'a>, ctx: &Context<'a>) -> Option<String> {
        let argument = node.child_by_field_name("argument")?;
        match argument.kind() {
            "identifier" => Some(ctx.get_node_text(&argument)),
            "member_expression" | "subscript_expression" => {
                MemberChainStrategy::chain_segments(&argument, ctx).map(|s| s.join("."))
            }
            _ => None,
        }
    }
}

impl Strategy for TypeofStrategy {
    fn name(&self) -> &'static str {
        "typeof"
    }

    fn can_handle<'a>(&self, node: &Node<'a>, _ctx: &Context<'a>) -> bool {
        node.kind() == "unary_expression"
            && node
                .child_by_field_name("operator")
                .is_some_and(|op| op.kind() == "typeof")
    }

    fn resolve<'a>(&self, node: &Node<'a>, ctx: &Context<'a>) -> Option<Replacement> {
        let name = Self::argument(node, ctx)?;
        let namespace = ctx.table().defines().typeof_namespace();
        if namespace.is_empty() {
            return None;
        }

        let found = resolve_replacement(
            namespace.as_value(),
            Comparator::TypeofArgument,
            &Candidate::TypeofArgument(name),
            ctx.table().options(),
        )?;

        // Report the path as it is spelled in the configuration.
        let mut segments = found.path.segments().to_vec();
        if let Some(first) = segments.first_mut() {
            first.insert_str(0, TYPEOF_PREFIX);
        }
        Some(Replacement {
            path: ConfigPath::new(segments),
            value: found.value,
        })
    }
}
