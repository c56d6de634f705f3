//! Expression parser/evaluator.
//!
//! A recursive-descent, precedence-climbing evaluator that walks raw
//! characters and evaluates as it parses — no token stream, no retained
//! syntax tree. Each statement hands its expression substring to
//! [`evaluate`], which owns a fresh [`Cursor`] for the duration of the
//! call.
//!
//! Malformed or type-incompatible input degrades to nil and parsing
//! continues best-effort; nothing in here returns an error.

use crate::cursor::Cursor;
use crate::diagnostics::DiagnosticSink;
use crate::environment::Environment;
use crate::operators::{arithmetic, compare, ArithOp, CompareOp};
use crate::value::Value;

/// Precedence of `..`: looser than all arithmetic, so each side of a
/// concatenation is a fully-reduced arithmetic result.
const CONCAT_PRECEDENCE: u8 = 0;

/// Evaluate one expression substring against the store.
pub fn evaluate(expr: &str, env: &Environment, sink: &DiagnosticSink) -> Value {
    ExprEvaluator::new(expr, env, sink).evaluate()
}

/// Single-use evaluator over one expression substring.
struct ExprEvaluator<'a> {
    cursor: Cursor<'a>,
    env: &'a Environment,
    sink: &'a DiagnosticSink,
}

impl<'a> ExprEvaluator<'a> {
    fn new(expr: &'a str, env: &'a Environment, sink: &'a DiagnosticSink) -> Self {
        ExprEvaluator {
            cursor: Cursor::new(expr),
            env,
            sink,
        }
    }

    fn evaluate(mut self) -> Value {
        self.expression()
    }

    /// expr := operand (CMP operand)?
    ///
    /// Comparison sits below all arithmetic and concatenation and is
    /// non-associative: at most one comparison per (sub)expression.
    fn expression(&mut self) -> Value {
        let left = self.operand(0);
        self.cursor.skip_spaces();
        match self.compare_op() {
            Some(op) => {
                let right = self.operand(0);
                Value::Bool(compare(&left, &right, op))
            }
            None => left,
        }
    }

    /// Consume a comparison operator if one is next.
    ///
    /// A single `=` is not an operator (it only appears in `var`
    /// statements, which never reach the evaluator), so `==` requires
    /// both characters before anything is consumed.
    fn compare_op(&mut self) -> Option<CompareOp> {
        let op = match (self.cursor.peek()?, self.cursor.peek_second()) {
            ('=', Some('=')) => CompareOp::Eq,
            ('!', Some('=')) => CompareOp::NotEq,
            ('<', Some('=')) => CompareOp::LtEq,
            ('<', _) => CompareOp::Lt,
            ('>', Some('=')) => CompareOp::GtEq,
            ('>', _) => CompareOp::Gt,
            _ => return None,
        };
        self.cursor.bump();
        if matches!(op, CompareOp::Eq | CompareOp::NotEq | CompareOp::LtEq | CompareOp::GtEq) {
            self.cursor.bump();
        }
        Some(op)
    }

    /// operand := primary (ARITH primary)* ('..' operand)*
    ///
    /// Precedence climbing: an operator is consumed only when its
    /// precedence is at least `min_precedence`; the right operand recurses
    /// with `precedence + 1`, which makes the chain left-associative. The
    /// concatenation loop runs after the arithmetic chain has fully
    /// reduced at this level.
    fn operand(&mut self, min_precedence: u8) -> Value {
        let mut left = self.primary();
        self.cursor.skip_spaces();

        while let Some(op) = self.cursor.peek().and_then(ArithOp::from_char) {
            let prec = op.precedence();
            if prec < min_precedence {
                break;
            }
            self.cursor.bump();
            self.cursor.skip_spaces();
            let right = self.operand(prec + 1);
            left = arithmetic(left, op, right, self.sink);
            self.cursor.skip_spaces();
        }

        // String concatenation (..): stringify both sides whatever their
        // original type. Consumed only at the loosest level, so `1 + 2 ..
        // "!"` reduces the sum before joining.
        while min_precedence <= CONCAT_PRECEDENCE
            && self.cursor.peek() == Some('.')
            && self.cursor.peek_second() == Some('.')
        {
            self.cursor.bump();
            self.cursor.bump();
            self.cursor.skip_spaces();
            let right = self.operand(CONCAT_PRECEDENCE + 1);
            let joined = format!("{}{}", left.stringify(), right.stringify());
            left = Value::string(joined);
            self.cursor.skip_spaces();
        }

        left
    }

    /// primary := NUMBER | STRING | table | IDENT | '(' expr ')'
    ///
    /// Unrecognizable input yields nil without consuming, leaving the
    /// callers' recovery (forward progress in table literals) to skip it.
    fn primary(&mut self) -> Value {
        self.cursor.skip_spaces();
        match self.cursor.peek() {
            Some('(') => {
                self.cursor.bump();
                let val = self.expression();
                self.cursor.skip_spaces();
                self.cursor.eat(')');
                val
            }
            Some('"') => {
                self.cursor.bump();
                self.string_literal()
            }
            Some(c) if c.is_ascii_digit() => self.number_literal(),
            Some('-') if self.cursor.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                self.number_literal()
            }
            Some(c) if c.is_ascii_alphabetic() => self.identifier(),
            Some('{') => self.table_literal(),
            _ => Value::Nil,
        }
    }

    /// Consume verbatim up to the next `"` (no escape processing); a
    /// missing closing quote takes the rest of the input.
    fn string_literal(&mut self) -> Value {
        let mut buf = String::new();
        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break;
            }
            buf.push(c);
            self.cursor.bump();
        }
        self.cursor.eat('"');
        Value::string(buf)
    }

    /// Digits with at most one `.` and an optional leading `-`; a dot
    /// selects Float, otherwise Int.
    fn number_literal(&mut self) -> Value {
        let mut buf = String::new();
        let mut seen_dot = false;

        if self.cursor.peek() == Some('-') {
            buf.push('-');
            self.cursor.bump();
        }
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                buf.push(c);
            } else if c == '.' && !seen_dot {
                // `1..2` is a concat, not a malformed float.
                if self.cursor.peek_second() == Some('.') {
                    break;
                }
                seen_dot = true;
                buf.push(c);
            } else {
                break;
            }
            self.cursor.bump();
        }

        if seen_dot {
            Value::Float(buf.parse().unwrap_or(0.0))
        } else {
            Value::Int(buf.parse().unwrap_or(0))
        }
    }

    /// Keyword literal or variable reference.
    fn identifier(&mut self) -> Value {
        let mut name = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }
        match name.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "nil" => Value::Nil,
            _ => self.env.get(&name),
        }
    }

    /// table := '{' (expr (',' expr)*)? '}'
    ///
    /// Elements are full expressions evaluated eagerly into a growable
    /// container. When an element consumes no input (unrecognizable
    /// character), one character is skipped so the scan always makes
    /// forward progress.
    fn table_literal(&mut self) -> Value {
        let mut items = Vec::new();
        self.cursor.bump();
        self.cursor.skip_spaces();
        while let Some(c) = self.cursor.peek() {
            if c == '}' {
                break;
            }
            if c == ',' {
                self.cursor.bump();
                self.cursor.skip_spaces();
                continue;
            }
            let before = self.cursor.offset();
            items.push(self.expression());
            self.cursor.skip_spaces();
            if self.cursor.offset() == before {
                self.cursor.bump();
            }
        }
        self.cursor.eat('}');
        Value::table(items)
    }
}
