//! Runtime values.
//!
//! [`Value`] is a closed sum over every kind the language has. Non-scalar
//! payloads sit behind [`Heap`] (immutable) or [`Shared`] (mutable in place)
//! and are only built through the factory methods here:
//!
//! ```text
//! let s = Value::string("abc");            // OK
//! let s = Value::String(Heap::new(...));   // ERROR: Heap::new is pub(crate)
//! ```

mod block;
mod error_value;
mod heap;
mod object;

pub use block::{CodeBlock, StatementGroup, StoredToken};
pub use error_value::{ErrorKind, ErrorValue};
pub use heap::{Heap, Shared};
pub use object::{Object, ObjectFlags};

use std::fmt;
use std::rc::Rc;

/// A runtime value.
///
/// Equality is structural. Arrays compare element by element, and a pair
/// of arrays already being compared further up counts as equal, so arrays
/// that contain themselves still compare without overflowing the stack.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Character(char),
    String(Heap<str>),
    /// Symbol name without the leading `#`.
    Symbol(Heap<str>),
    Array(Shared<Vec<Value>>),
    ByteArray(Shared<Vec<u8>>),
    CodeBlock(Heap<CodeBlock>),
    Error(Heap<ErrorValue>),
    Nil,
}

impl Value {
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Heap::from_rc(Rc::from(s.as_ref())))
    }

    #[inline]
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Value::Symbol(Heap::from_rc(Rc::from(name.as_ref())))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    #[inline]
    pub fn byte_array(bytes: Vec<u8>) -> Self {
        Value::ByteArray(Shared::new(bytes))
    }

    #[inline]
    pub fn block(block: CodeBlock) -> Self {
        Value::CodeBlock(Heap::new(block))
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Value::Error(Heap::new(ErrorValue::new(kind, message)))
    }

    pub fn name_error(message: impl Into<String>) -> Self {
        Self::error(ErrorKind::NameError, message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::error(ErrorKind::TypeError, message)
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        Self::error(ErrorKind::ValueError, message)
    }

    pub fn zero_division() -> Self {
        Self::error(ErrorKind::ZeroDivisionError, "")
    }

    /// Class name used for dispatch errors and `class`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::Character(_) => "Character",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Array(_) => "Array",
            Value::ByteArray(_) => "ByteArray",
            Value::CodeBlock(_) => "CodeBlock",
            Value::Error(e) => e.kind().name(),
            Value::Nil => "Nil",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&CodeBlock> {
        match self {
            Value::CodeBlock(b) => Some(b),
            _ => None,
        }
    }

    /// Text without literal decoration: no quotes on strings, no `#` on
    /// symbols, no `$` on characters.
    pub fn display_string(&self) -> String {
        match self {
            Value::String(s) | Value::Symbol(s) => s.to_string(),
            Value::Character(c) => c.to_string(),
            other => other.to_string(),
        }
    }

    /// Arithmetic negation for signed literals.
    pub fn negated(&self) -> Option<Value> {
        match self {
            Value::Integer(n) => n.checked_neg().map(Value::Integer),
            Value::Float(f) => Some(Value::Float(-f)),
            _ => None,
        }
    }
}

/// Whether a symbol name can be written as `#name` and lex back the same.
fn is_plain_symbol(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

type Array = Shared<Vec<Value>>;

/// `#(...)` stands in for an array already being printed further out.
fn write_array(f: &mut fmt::Formatter<'_>, items: &Array, open: &mut Vec<Array>) -> fmt::Result {
    if open.iter().any(|outer| outer.ptr_eq(items)) {
        return f.write_str("#(...)");
    }
    open.push(items.clone());
    f.write_str("#(")?;
    for (i, item) in items.borrow().iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match item {
            Value::Array(inner) => write_array(f, inner, open)?,
            other => write!(f, "{other}")?,
        }
    }
    open.pop();
    f.write_str(")")
}

fn arrays_equal(left: &Array, right: &Array, open: &mut Vec<(Array, Array)>) -> bool {
    if left.ptr_eq(right) || open.iter().any(|(l, r)| l.ptr_eq(left) && r.ptr_eq(right)) {
        return true;
    }
    let (xs, ys) = (left.borrow(), right.borrow());
    if xs.len() != ys.len() {
        return false;
    }
    open.push((left.clone(), right.clone()));
    let same = xs.iter().zip(ys.iter()).all(|pair| match pair {
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y, open),
        (x, y) => x == y,
    });
    open.pop();
    same
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(x), Value::Integer(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => x == y,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Character(x), Value::Character(y)) => x == y,
            (Value::String(x), Value::String(y)) | (Value::Symbol(x), Value::Symbol(y)) => x == y,
            (Value::Array(x), Value::Array(y)) => arrays_equal(x, y, &mut Vec::new()),
            (Value::ByteArray(x), Value::ByteArray(y)) => x == y,
            (Value::CodeBlock(x), Value::CodeBlock(y)) => x == y,
            (Value::Error(x), Value::Error(y)) => x == y,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    f.write_str(&text.replace('\'', "''"))?;
    f.write_str("'")
}

/// The printString form, which lexes back as the same literal where one
/// exists.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:.10}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Character(c) => write!(f, "${c}"),
            Value::String(s) => write_quoted(f, s),
            Value::Symbol(name) if is_plain_symbol(name) => write!(f, "#{}", &**name),
            Value::Symbol(name) => {
                f.write_str("#")?;
                write_quoted(f, name)
            }
            Value::Array(items) => write_array(f, items, &mut Vec::new()),
            Value::ByteArray(bytes) => {
                f.write_str("#[")?;
                for (i, byte) in bytes.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte}")?;
                }
                f.write_str("]")
            }
            Value::CodeBlock(block) => write!(f, "{}", &**block),
            Value::Error(error) => write!(f, "{}", &**error),
            Value::Nil => f.write_str("nil"),
        }
    }
}
