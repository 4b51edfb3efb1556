//! Query variable values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded query variables, in insertion order
pub type QueryVars = IndexMap<String, QueryValue>;

/// Value of one query variable.
///
/// `Multiple` is an array-style parameter, written as repeated `name[]` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The scalar value, if this is not an array-style parameter
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(_) => None,
        }
    }

    /// The sequence of values, if this is an array-style parameter
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            QueryValue::Single(_) => None,
            QueryValue::Multiple(values) => Some(values),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, QueryValue::Multiple(_))
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Single(value) => f.write_str(value),
            QueryValue::Multiple(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        QueryValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl PartialEq<str> for QueryValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for QueryValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for QueryValue {
    fn eq(&self, other: &[&str; N]) -> bool {
        match self.as_slice() {
            Some(values) => values.iter().map(String::as_str).eq(other.iter().copied()),
            None => false,
        }
    }
}
