//! Runtime value representation.
//!
//! The dynamic payload a suspended frame waits for and produces. Frames are
//! untyped at the chain boundary, so resumption traffics in [`Value`] rather
//! than a per-frame generic parameter.

use std::fmt;

/// A runtime value delivered to or produced by a resumed frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Unit,
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Unit => write!(f, "()"),
            Value::List(items) => {
                let rendered: Vec<_> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}
