//! Cell values and column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell in a dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// No value present.
    #[default]
    Missing,
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Free text.
    Text(String),
}

impl Value {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Returns true if the cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns true if the cell holds a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Text view of the cell, if it holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            // Whole floats keep a trailing ".0" so they read back as floats.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Effective type of a column, derived from its current cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing cell is a number.
    Numeric,
    /// At least one non-missing cell is text.
    Text,
    /// No non-missing cells (including empty columns).
    MissingOnly,
}

impl ColumnKind {
    /// Classify a column from its cells.
    ///
    /// Mixed text/number columns are `Text`.
    pub fn classify(values: &[Value]) -> Self {
        let mut saw_number = false;
        for value in values {
            match value {
                Value::Text(_) => return ColumnKind::Text,
                Value::Integer(_) | Value::Float(_) => saw_number = true,
                Value::Missing => {}
            }
        }

        if saw_number {
            ColumnKind::Numeric
        } else {
            ColumnKind::MissingOnly
        }
    }
}
