// Matching strategies, one per candidate node kind.
//
// Strategies are tried in order and the first one whose `can_handle` accepts
// the node decides it:
// 1. MemberChain - Property chains: process.env.NODE_ENV, process.env["API"]
// 2. Identifier  - Bare names: VERSION, { VERSION }
// 3. Typeof      - typeof window, typeof process.browser

pub mod identifier;
pub mod member_chain;
pub mod typeof_expr;

pub use identifier::IdentifierStrategy;
pub use member_chain::MemberChainStrategy;
pub use typeof_expr::TypeofStrategy;

use tree_sitter::Node;

/// Whether `node` is the child stored under `field` of `parent`.
pub(crate) fn is_field(parent: &Node, field: &str, node: &Node) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|child| child.id() == node.id())
}

/// Binding and assignment-target positions. Substituting a literal there
/// would not parse, so these nodes are never candidates. This is purely
/// syntactic; shadowing is not considered.
pub(crate) fn is_write_position(node: &Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };

    match parent.kind() {
        "assignment_expression" | "augmented_assignment_expression" | "for_in_statement" => {
            is_field(&parent, "left", node)
        }
        "assignment_pattern" | "object_assignment_pattern" => is_field(&parent, "left", node),
        "update_expression" => is_field(&parent, "argument", node),
        "unary_expression" => parent
            .child_by_field_name("operator")
            .is_some_and(|op| op.kind() == "delete"),
        "arrow_function" => is_field(&parent, "parameter", node),
        "catch_clause" => is_field(&parent, "parameter", node),
        "required_parameter" | "optional_parameter" => is_field(&parent, "pattern", node),
        "pair_pattern" => is_field(&parent, "value", node),
        "formal_parameters"
        | "array_pattern"
        | "object_pattern"
        | "rest_pattern"
        | "import_clause"
        | "import_specifier"
        | "export_specifier"
        | "namespace_import"
        | "namespace_export"
        | "type_query"
        | "jsx_opening_element"
        | "jsx_closing_element"
        | "jsx_self_closing_element"
        | "jsx_attribute"
        | "nested_identifier" => true,
        // Declarator, function, class, method, enum and namespace names.
        _ => is_field(&parent, "name", node),
    }
}
