//! Value types for the Tern interpreter.

use std::fmt;

/// A runtime value. Every value travels together with a runtime type
/// tag, and the tag is what operators dispatch on, never the host
/// representation of the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The unit value representing "no value"
    Unit,
    /// A 64-bit signed integer value
    Int(i64),
    /// An IEEE-754 double-precision value
    Float(f64),
    /// A UTF-8 encoded string value
    Str(String),
    /// A boolean value (true or false)
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
        }
    }
}
