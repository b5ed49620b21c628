use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            function::{Builtin, Function},
            hash_key::HashKey,
        },
    },
};

/// The kind tag of a [`Value`].
///
/// Displayed in upper case, as it appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Integer,
    Boolean,
    Null,
    String,
    Array,
    Hash,
    Function,
    Builtin,
    ReturnValue,
    Error,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// An entry of a [`Value::Hash`]: the original key value and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was written, kept for display.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}

/// Represents a runtime value in the interpreter.
///
/// Compound values are reference counted: copying a value shares it, and
/// builtins that "modify" an array build a new one instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// The single null value.
    Null,
    /// An immutable string.
    String(Rc<str>),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hash key to its original key and value.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function closing over its defining environment.
    Function(Rc<Function>),
    /// A native builtin.
    Builtin(Builtin),
    /// A value on its way out of a function body.
    ReturnValue(Box<Self>),
    /// A failed evaluation.
    Error(RuntimeError),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Value {
    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(1).kind(), ValueKind::Integer);
    /// assert_eq!(Value::Null.kind().to_string(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
            Self::Function(_) => ValueKind::Function,
            Self::Builtin(_) => ValueKind::Builtin,
            Self::ReturnValue(_) => ValueKind::ReturnValue,
            Self::Error(_) => ValueKind::Error,
        }
    }

    /// Truthiness used by `if` and `!`: only `null` and `false` are falsy.
    /// Integer zero is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns `true` for error values.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Computes the hash key of an Integer, Boolean or String.
    ///
    /// # Errors
    /// Any other kind yields `UnusableHashKey`.
    pub fn hash_key(&self) -> EvalResult<HashKey> {
        match self {
            Self::Integer(n) => Ok(HashKey::integer(*n)),
            Self::Boolean(b) => Ok(HashKey::boolean(*b)),
            Self::String(s) => Ok(HashKey::string(s)),
            other => Err(RuntimeError::UnusableHashKey { kind: other.kind() }),
        }
    }

    /// Equality as the `==` operator sees it for non-integer operands.
    ///
    /// Booleans and null compare by value, which coincides with identity
    /// since each has a single representation. Arrays, hashes and functions
    /// compare by identity: two separately built arrays with equal elements
    /// are not identical. Values of different kinds are never identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            _ => false,
        }
    }

    /// Unwraps a `ReturnValue` to the value it carries; other values are
    /// returned as they are.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(inner) => *inner,
            other => other,
        }
    }

    /// Renders the value for user-visible output.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::from("two"), Value::Null]);
    /// assert_eq!(array.inspect(), "[1, two, null]");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

/// Structural equality, used by tests and hash pairs. Functions compare by
/// identity. This is not the language's `==`; see [`Value::is_identical`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash(pairs) => {
                let mut entries: Vec<_> = pairs.iter().collect();
                entries.sort_by_key(|(key, _)| **key);
                let entries: Vec<String> =
                    entries.into_iter()
                           .map(|(_, pair)| format!("{}:{}", pair.key, pair.value))
                           .collect();
                write!(f, "{{{}}}", entries.join(", "))
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hash_of(pairs: Vec<(Value, Value)>) -> Value {
        let map = pairs.into_iter()
                       .map(|(key, value)| (key.hash_key().unwrap(), HashPair { key, value }))
                       .collect();
        Value::Hash(Rc::new(map))
    }

    #[test]
    fn inspects_scalars() {
        assert_eq!(Value::Integer(-12).inspect(), "-12");
        assert_eq!(Value::Boolean(true).inspect(), "true");
        assert_eq!(Value::Null.inspect(), "null");
        assert_eq!(Value::from("raw text").inspect(), "raw text");
    }

    #[test]
    fn inspects_hash_in_key_order() {
        let hash = hash_of(vec![(Value::Integer(2), Value::from("two")),
                                (Value::Integer(1), Value::from("one"))]);
        assert_eq!(hash.inspect(), "{1:one, 2:two}");
    }

    #[test]
    fn inspects_errors_and_returns() {
        let error = Value::Error(RuntimeError::IdentifierNotFound { name: "x".to_string() });
        assert_eq!(error.inspect(), "ERROR: identifier not found: x");
        assert_eq!(Value::ReturnValue(Box::new(Value::Integer(3))).inspect(), "3");
    }

    #[test]
    fn only_null_and_false_are_falsy() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(vec![]).is_truthy());
    }

    #[test]
    fn hash_keys_follow_content() {
        let a = Value::from("Hello world");
        let b = Value::from(String::from("Hello world"));
        let c = Value::from("My name is johnny");
        assert_eq!(a.hash_key(), b.hash_key());
        assert_ne!(a.hash_key(), c.hash_key());
        assert_eq!(Value::Integer(5).hash_key(), Value::Integer(5).hash_key());
        assert_eq!(Value::from(vec![]).hash_key(),
                   Err(RuntimeError::UnusableHashKey { kind: ValueKind::Array }));
    }

    #[test]
    fn arrays_are_identical_only_to_themselves() {
        let a = Value::from(vec![Value::Integer(1)]);
        let b = Value::from(vec![Value::Integer(1)]);
        assert!(a.is_identical(&a.clone()));
        assert!(!a.is_identical(&b));
        assert_eq!(a, b);
    }
}
