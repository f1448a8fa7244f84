use std::cmp::Ordering;

use super::value::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    BitAnd,
    BitOr,
    BitXor,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    LogicalAnd,
    LogicalOr,
    NullishCoalescing,
    In,
    InstanceOf,
}

impl BinaryOp {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            "**" => Some(Self::Exp),
            "<<" => Some(Self::ShiftLeft),
            ">>" => Some(Self::ShiftRight),
            ">>>" => Some(Self::UnsignedShiftRight),
            "&" => Some(Self::BitAnd),
            "|" => Some(Self::BitOr),
            "^" => Some(Self::BitXor),
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            "===" => Some(Self::StrictEq),
            "!==" => Some(Self::StrictNotEq),
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEq),
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterEq),
            "&&" => Some(Self::LogicalAnd),
            "||" => Some(Self::LogicalOr),
            "??" => Some(Self::NullishCoalescing),
            "in" => Some(Self::In),
            "instanceof" => Some(Self::InstanceOf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::NullishCoalescing => "??",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Exp
        )
    }

    pub fn is_bitwise(&self) -> bool {
        matches!(
            self,
            Self::ShiftLeft
                | Self::ShiftRight
                | Self::UnsignedShiftRight
                | Self::BitAnd
                | Self::BitOr
                | Self::BitXor
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::StrictEq
                | Self::StrictNotEq
                | Self::Less
                | Self::LessEq
                | Self::Greater
                | Self::GreaterEq
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(
            self,
            Self::LogicalAnd | Self::LogicalOr | Self::NullishCoalescing
        )
    }

    /// Operators a binary-expression fold may evaluate. Logical operators
    /// form a different expression kind, and `in` / `instanceof` depend on
    /// runtime objects.
    pub fn is_foldable(&self) -> bool {
        self.is_arithmetic() || self.is_bitwise() || self.is_comparison()
    }

    pub fn evaluate(&self, left: &JsValue, right: &JsValue) -> Option<JsValue> {
        let num = |f: fn(f64, f64) -> f64| Some(JsValue::Number(f(left.to_number(), right.to_number())));
        let int = |f: fn(i32, i32) -> i32| {
            Some(JsValue::Number(
                f(to_int32(left.to_number()), to_int32(right.to_number())) as f64,
            ))
        };
        match self {
            Self::Add => match (left, right) {
                (JsValue::String(_), _) | (_, JsValue::String(_)) => Some(JsValue::String(
                    format!("{}{}", left.to_js_string(), right.to_js_string()),
                )),
                _ => num(|a, b| a + b),
            },
            Self::Sub => num(|a, b| a - b),
            Self::Mul => num(|a, b| a * b),
            Self::Div => num(|a, b| a / b),
            Self::Mod => num(|a, b| a % b),
            Self::Exp => num(js_pow),
            Self::ShiftLeft => int(|a, b| a.wrapping_shl(b as u32 & 31)),
            Self::ShiftRight => int(|a, b| a.wrapping_shr(b as u32 & 31)),
            Self::UnsignedShiftRight => {
                let shift = to_int32(right.to_number()) as u32 & 31;
                let value = to_int32(left.to_number()) as u32;
                Some(JsValue::Number((value >> shift) as f64))
            }
            Self::BitAnd => int(|a, b| a & b),
            Self::BitOr => int(|a, b| a | b),
            Self::BitXor => int(|a, b| a ^ b),
            Self::Eq => Some(JsValue::Bool(loose_equals(left, right))),
            Self::NotEq => Some(JsValue::Bool(!loose_equals(left, right))),
            Self::StrictEq => Some(JsValue::Bool(strict_equals(left, right))),
            Self::StrictNotEq => Some(JsValue::Bool(!strict_equals(left, right))),
            Self::Less => Some(JsValue::Bool(matches!(
                compare(left, right),
                Some(Ordering::Less)
            ))),
            Self::LessEq => Some(JsValue::Bool(matches!(
                compare(left, right),
                Some(Ordering::Less | Ordering::Equal)
            ))),
            Self::Greater => Some(JsValue::Bool(matches!(
                compare(left, right),
                Some(Ordering::Greater)
            ))),
            Self::GreaterEq => Some(JsValue::Bool(matches!(
                compare(left, right),
                Some(Ordering::Greater | Ordering::Equal)
            ))),
            Self::LogicalAnd
            | Self::LogicalOr
            | Self::NullishCoalescing
            | Self::In
            | Self::InstanceOf => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
    BitNot,
    LogicalNot,
    TypeOf,
    Void,
}

impl UnaryOp {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "-" => Some(Self::Neg),
            "+" => Some(Self::Pos),
            "~" => Some(Self::BitNot),
            "!" => Some(Self::LogicalNot),
            "typeof" => Some(Self::TypeOf),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::BitNot => "~",
            Self::LogicalNot => "!",
            Self::TypeOf => "typeof",
            Self::Void => "void",
        }
    }

    pub fn evaluate(&self, operand: &JsValue) -> Option<JsValue> {
        match self {
            Self::Neg => Some(JsValue::Number(-operand.to_number())),
            Self::Pos => Some(JsValue::Number(operand.to_number())),
            Self::BitNot => Some(JsValue::Number(!to_int32(operand.to_number()) as f64)),
            Self::LogicalNot => Some(JsValue::Bool(!operand.is_truthy())),
            Self::TypeOf => Some(JsValue::String(operand.type_of().to_string())),
            Self::Void => Some(JsValue::Undefined),
        }
    }
}

/// ECMAScript `ToInt32`.
fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

fn js_pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

fn strict_equals(left: &JsValue, right: &JsValue) -> bool {
    match (left, right) {
        (JsValue::Undefined, JsValue::Undefined) | (JsValue::Null, JsValue::Null) => true,
        (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
        (JsValue::Number(a), JsValue::Number(b)) => a == b,
        (JsValue::String(a), JsValue::String(b)) => a == b,
        _ => false,
    }
}

fn loose_equals(left: &JsValue, right: &JsValue) -> bool {
    match (left, right) {
        (JsValue::Undefined | JsValue::Null, JsValue::Undefined | JsValue::Null) => true,
        (JsValue::Undefined | JsValue::Null, _) | (_, JsValue::Undefined | JsValue::Null) => false,
        (JsValue::Bool(_), _) => loose_equals(&JsValue::Number(left.to_number()), right),
        (_, JsValue::Bool(_)) => loose_equals(left, &JsValue::Number(right.to_number())),
        (JsValue::Number(_), JsValue::String(_)) | (JsValue::String(_), JsValue::Number(_)) => {
            left.to_number() == right.to_number()
        }
        _ => strict_equals(left, right),
    }
}

/// Abstract relational comparison. `None` means undefined (a NaN operand).
fn compare(left: &JsValue, right: &JsValue) -> Option<Ordering> {
    if let (JsValue::String(a), JsValue::String(b)) = (left, right) {
        return Some(a.encode_utf16().cmp(b.encode_utf16()));
    }
    left.to_number().partial_cmp(&right.to_number())
}
