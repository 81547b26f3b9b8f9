//! Dynamic values
//!
//! `Value` is a small dynamically typed value used where branches need to
//! dispatch on the runtime kind of their input rather than on a static
//! type. Kind membership is hierarchical: `Number` contains `Int` and
//! `Float`, and `Any` contains everything.

use crate::pattern::Matchable;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil value
    Nil,

    /// Boolean values
    Bool(bool),

    /// Integer values
    Int(i64),

    /// Floating point values
    Float(f64),

    /// String values
    Str(String),

    /// Symbol values (interned-style names such as `:other`)
    Symbol(String),

    /// List values
    List(Vec<Value>),
}

/// Kind tags for [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Any,
    Nil,
    Bool,
    Int,
    Float,
    Number,
    Str,
    Symbol,
    List,
}

impl ValueKind {
    /// Whether values of kind `other` are also of this kind
    pub fn contains(self, other: ValueKind) -> bool {
        match self {
            ValueKind::Any => true,
            ValueKind::Number => matches!(other, ValueKind::Int | ValueKind::Float | ValueKind::Number),
            kind => kind == other,
        }
    }
}

impl Value {
    /// Create a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// The concrete kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl Matchable for Value {
    type Kind = ValueKind;

    fn is_a(&self, kind: &ValueKind) -> bool {
        kind.contains(self.kind())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
