//! Runtime values for the Arlang interpreter.
//!
//! Every expression evaluates to a `Value`. The variant set is closed; the
//! two heap-backed variants (`Str`, `Table`) own their payload through
//! `Heap<T>`, whose private constructor forces all allocation through the
//! factory methods on `Value`.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let t = Value::table(vec![Value::Int(1)]);       // OK
//! ```
//!
//! ## Prevented (Won't Compile)
//!
//! ```text
//! let s = Value::Str(Heap::new(...));              // ERROR: Heap::new is pub(super)
//! let s = Value::Str(Rc::new(...));                // ERROR: Expected Heap, got Rc
//! ```

mod heap;

use std::fmt;

pub use heap::Heap;

/// Runtime value in the Arlang interpreter.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Absent value; what failed or empty expressions evaluate to.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i32),
    /// Floating-point value.
    Float(f32),
    /// String value.
    Str(Heap<String>),
    /// Table: an ordered sequence of values.
    Table(Heap<Vec<Value>>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a table value.
    #[inline]
    pub fn table(items: Vec<Value>) -> Self {
        Value::Table(Heap::new(items))
    }
}

// Value Methods

impl Value {
    /// Check if this value is truthy.
    ///
    /// The exact ladder: nil is false, bool is itself, numbers are truthy
    /// when nonzero, strings when non-empty, tables when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Table(items) => !items.is_empty(),
        }
    }

    /// Returns `true` for the two numeric variants.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Widen to a float, if numeric.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Int(n) => Some(*n as f32),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Render this value as text for concatenation and table elements.
    ///
    /// Strings pass through verbatim; floats use the shortest
    /// round-trip decimal form (general format, never fixed-point with
    /// trailing zeros); tables render as the placeholder `[table]` —
    /// the element-by-element form is only used at top-level printing,
    /// see [`Value::display_value`].
    pub fn stringify(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.to_string(),
            Value::Table(_) => "[table]".to_string(),
        }
    }

    /// Render this value for `print` output.
    ///
    /// Tables render as `{e1, e2, …}` with `", "` separators and no
    /// trailing comma, stringifying each element; every other variant
    /// defers to [`Value::stringify`].
    pub fn display_value(&self) -> String {
        match self {
            Value::Table(items) => {
                let inner: Vec<_> = items.iter().map(Value::stringify).collect();
                format!("{{{}}}", inner.join(", "))
            }
            other => other.stringify(),
        }
    }

    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Table(_) => "table",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Table(items) => write!(f, "Table({:?})", &**items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_ladder() {
        assert!(!Value::Nil.is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Int(1).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Float(0.5).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(Value::string("x").is_truthy());
        assert!(!Value::string("").is_truthy());
        assert!(Value::table(vec![Value::Nil]).is_truthy());
        assert!(!Value::table(vec![]).is_truthy());
    }

    #[test]
    fn stringify_scalars() {
        assert_eq!(Value::Nil.stringify(), "nil");
        assert_eq!(Value::Bool(true).stringify(), "true");
        assert_eq!(Value::Bool(false).stringify(), "false");
        assert_eq!(Value::Int(-7).stringify(), "-7");
        assert_eq!(Value::string("verbatim").stringify(), "verbatim");
    }

    #[test]
    fn stringify_float_uses_general_format() {
        // No fixed-point padding: 5.0 renders as "5", 0.5 as "0.5".
        assert_eq!(Value::Float(5.0).stringify(), "5");
        assert_eq!(Value::Float(0.5).stringify(), "0.5");
        assert_eq!(Value::Float(-2.25).stringify(), "-2.25");
    }

    #[test]
    fn stringify_table_is_placeholder() {
        let t = Value::table(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(t.stringify(), "[table]");
    }

    #[test]
    fn display_value_renders_table_elements() {
        let t = Value::table(vec![
            Value::Int(1),
            Value::string("two"),
            Value::Float(3.5),
        ]);
        assert_eq!(t.display_value(), "{1, two, 3.5}");
        assert_eq!(Value::table(vec![]).display_value(), "{}");
    }

    #[test]
    fn display_value_nested_table_uses_placeholder() {
        let inner = Value::table(vec![Value::Int(1)]);
        let outer = Value::table(vec![Value::Int(0), inner]);
        assert_eq!(outer.display_value(), "{0, [table]}");
    }

    #[test]
    fn clone_shares_table_storage() {
        let t = Value::table(vec![Value::Int(1)]);
        let u = t.clone();
        if let (Value::Table(a), Value::Table(b)) = (&t, &u) {
            assert!(std::rc::Rc::ptr_eq(a.inner(), b.inner()));
        } else {
            unreachable!();
        }
    }
}
