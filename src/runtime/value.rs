use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Boundary value representation
///
/// The engine accepts dynamically shaped input: a single integer, an array
/// of integers, or something it must reject. `Value` is the tagged variant
/// that makes the shape explicit before any execution logic runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Array of values (reference-counted)
    Array(Arc<Vec<Value>>),
}

impl Value {
    /// Creates an array value from a vector of values
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(Arc::new(values))
    }

    /// Creates an array value from raw integers
    pub fn ints(values: Vec<i64>) -> Self {
        Value::Array(Arc::new(values.into_iter().map(Value::Int).collect()))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Array(_) => "array".to_string(),
        }
    }

    /// Extracts the integer value
    ///
    /// No coercion: batch arithmetic is fixed-width, so a float or a
    /// numeric string is not an int here.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(Error::InvalidArgument {
                got: self.type_name(),
            }),
        }
    }

    /// Returns a reference to the array elements
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(Error::InvalidArgument {
                got: self.type_name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Equality against a plain vector, mostly for tests
impl PartialEq<Vec<Value>> for Value {
    fn eq(&self, other: &Vec<Value>) -> bool {
        match self {
            Value::Array(arr) => arr.as_ref() == other,
            _ => false,
        }
    }
}
