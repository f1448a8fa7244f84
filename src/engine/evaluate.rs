//! Confident static evaluation of expression subtrees.
//!
//! An expression is confident when its value is fully determined by literals
//! in the source and by substitutions already recorded in the pass. Anything
//! that depends on runtime state yields `None`.

use tree_sitter::Node;

use super::context::Context;
use super::operators::{BinaryOp, UnaryOp};
use super::value::JsValue;
use crate::utils::decode_js_string;

const MAX_EVAL_DEPTH: usize = 64;

pub fn evaluate<'a>(node: &Node<'a>, ctx: &Context<'a>) -> Option<JsValue> {
    evaluate_with_depth(node, ctx, 0)
}

fn evaluate_with_depth<'a>(node: &Node<'a>, ctx: &Context<'a>, depth: usize) -> Option<JsValue> {
    if depth >= MAX_EVAL_DEPTH {
        return None;
    }

    if let Some(edit) = ctx.substituted(node) {
        return edit.value;
    }

    let value = match node.kind() {
        "number" => parse_number_literal(&ctx.get_node_text(node)).map(JsValue::Number),
        "string" => decode_js_string(&ctx.get_node_text(node)).map(JsValue::String),
        "template_string" => evaluate_template(node, ctx),
        "true" => Some(JsValue::Bool(true)),
        "false" => Some(JsValue::Bool(false)),
        "null" => Some(JsValue::Null),
        "undefined" => Some(JsValue::Undefined),
        "identifier" if ctx.get_node_text(node) == "undefined" => Some(JsValue::Undefined),
        "parenthesized_expression" => {
            let inner = node.named_child(0)?;
            evaluate_with_depth(&inner, ctx, depth + 1)
        }
        "unary_expression" => {
            let operator = node.child_by_field_name("operator")?;
            let op = UnaryOp::parse(operator.kind())?;
            let argument = node.child_by_field_name("argument")?;
            let operand = evaluate_with_depth(&argument, ctx, depth + 1)?;
            op.evaluate(&operand)
        }
        "binary_expression" => {
            let operator = node.child_by_field_name("operator")?;
            let op = BinaryOp::parse(operator.kind())?;
            if !op.is_foldable() {
                return None;
            }
            let left = node.child_by_field_name("left")?;
            let right = node.child_by_field_name("right")?;
            let left = evaluate_with_depth(&left, ctx, depth + 1)?;
            let right = evaluate_with_depth(&right, ctx, depth + 1)?;
            op.evaluate(&left, &right)
        }
        _ => None,
    }?;

    match value {
        JsValue::Number(n) if !n.is_finite() => None,
        value => Some(value),
    }
}

/// Template literals count only without `${}` substitutions.
fn evaluate_template<'a>(node: &Node<'a>, ctx: &Context<'a>) -> Option<JsValue> {
    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "template_substitution")
    {
        return None;
    }
    decode_js_string(&ctx.get_node_text(node)).map(JsValue::String)
}

/// Parses a JavaScript numeric literal. BigInt literals have no `f64` value.
pub fn parse_number_literal(text: &str) -> Option<f64> {
    let text = text.trim().replace('_', "");
    if text.ends_with('n') {
        return None;
    }

    let radix = |digits: &str, radix: u32| -> Option<f64> {
        if digits.is_empty() {
            return None;
        }
        digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
    };

    let lower = text.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        radix(bin, 2)
    } else if text.len() > 1 && text.starts_with('0') && text.bytes().all(|b| b.is_ascii_digit()) {
        // Legacy octal (0755); a literal with an 8 or 9 in it is decimal.
        radix(&text[1..], 8).or_else(|| text.parse().ok())
    } else {
        text.parse().ok()
    }
}
