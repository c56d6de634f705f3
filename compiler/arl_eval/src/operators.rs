//! Binary operator implementations for the evaluator.
//!
//! The type set is fixed, so enum-based dispatch with pattern matching is
//! used throughout; there are no trait objects. Arithmetic follows the
//! degrade-and-warn contract: incompatible operands produce nil plus a
//! warning on the diagnostic sink, never an error.

use crate::diagnostics::DiagnosticSink;
use crate::value::Value;

/// Arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    /// Map an operator character, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '*' => Some(ArithOp::Mul),
            '/' => Some(ArithOp::Div),
            '%' => Some(ArithOp::Mod),
            _ => None,
        }
    }

    /// Binding strength: `*` `/` `%` bind tighter than `+` `-`.
    pub fn precedence(self) -> u8 {
        match self {
            ArithOp::Mul | ArithOp::Div | ArithOp::Mod => 2,
            ArithOp::Add | ArithOp::Sub => 1,
        }
    }

    /// Source-text symbol, for diagnostics.
    pub fn as_symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

/// Comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Evaluate an arithmetic operation.
///
/// Both operands must be numeric; anything else warns on `sink` and yields
/// nil. The result is `Float` when either operand is `Float` **or** the
/// operator is `/` — division always takes the float path, even int/int.
/// Division and modulo by a float zero yield `0.0` (no infinities or NaN);
/// integer modulo by zero yields `0`.
pub fn arithmetic(left: Value, op: ArithOp, right: Value, sink: &DiagnosticSink) -> Value {
    if !left.is_numeric() || !right.is_numeric() {
        sink.warn(&format!(
            "arithmetic on non-number: {} {} {}",
            left.type_name(),
            op.as_symbol(),
            right.type_name()
        ));
        return Value::Nil;
    }

    if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) || op == ArithOp::Div {
        let (a, b) = match (left.as_f32(), right.as_f32()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Value::Nil,
        };
        Value::Float(float_arith(a, op, b))
    } else {
        let (a, b) = match (left, right) {
            (Value::Int(a), Value::Int(b)) => (a, b),
            _ => return Value::Nil,
        };
        Value::Int(int_arith(a, op, b))
    }
}

/// Float path; `Div` is unreachable on the int path so it only appears here.
fn float_arith(a: f32, op: ArithOp, b: f32) -> f32 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => {
            if b != 0.0 {
                a / b
            } else {
                0.0
            }
        }
        ArithOp::Mod => {
            if b != 0.0 {
                a % b
            } else {
                0.0
            }
        }
    }
}

/// Int path. Wrapping semantics keep overflow deterministic without a
/// failure channel (the evaluator has none).
fn int_arith(a: i32, op: ArithOp, b: i32) -> i32 {
    match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
        ArithOp::Mul => a.wrapping_mul(b),
        // `/` always floats; only `%` reaches here among the two.
        ArithOp::Div => 0,
        ArithOp::Mod => {
            if b != 0 {
                a.wrapping_rem(b)
            } else {
                0
            }
        }
    }
}

/// Evaluate a comparison.
///
/// Defined for string/string (lexicographic) and numeric/numeric (after
/// widening both sides to float); every other type pairing is `false` for
/// every operator — a failed comparison is not an error.
pub fn compare(a: &Value, b: &Value, op: CompareOp) -> bool {
    match (a, b) {
        (Value::Str(x), Value::Str(y)) => {
            let (x, y) = (x.as_str(), y.as_str());
            match op {
                CompareOp::Eq => x == y,
                CompareOp::NotEq => x != y,
                CompareOp::Lt => x < y,
                CompareOp::LtEq => x <= y,
                CompareOp::Gt => x > y,
                CompareOp::GtEq => x >= y,
            }
        }
        _ => match (a.as_f32(), b.as_f32()) {
            (Some(x), Some(y)) => match op {
                CompareOp::Eq => x == y,
                CompareOp::NotEq => x != y,
                CompareOp::Lt => x < y,
                CompareOp::LtEq => x <= y,
                CompareOp::Gt => x > y,
                CompareOp::GtEq => x >= y,
            },
            _ => false,
        },
    }
}
