//! Loosely-typed request values and the rules for reading them.
//!
//! Admin forms submit numbers either as JSON numbers or as the raw text typed
//! into an input box, so numeric fields accept both shapes. Anything else
//! (booleans, arrays, objects) is rejected at deserialization time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Presence check used by the required-field rules.
    ///
    /// Mirrors form truthiness: an empty string, zero and NaN count as absent.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Finite numeric reading of the value, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Reads a strictly positive decimal.
    #[must_use]
    pub fn as_positive_decimal(&self) -> Option<f64> {
        self.as_number().filter(|n| *n > 0.0)
    }

    /// Reads a strictly positive whole number that fits the store column.
    #[must_use]
    pub fn as_positive_integer(&self) -> Option<i32> {
        let n = self.as_number()?;
        if n <= 0.0 || n.fract() != 0.0 || n > f64::from(i32::MAX) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        Some(n as i32)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

pub(crate) fn present_value(value: Option<&FieldValue>) -> Option<&FieldValue> {
    value.filter(|v| v.is_truthy())
}

/// Field-level validation failures. The messages are what API callers see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("User email, name, price, and quantity are required")]
    MissingCartFields,

    #[error("Price must be a positive number")]
    InvalidPrice,

    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("All fields are required")]
    MissingProductFields,

    #[error("Price must be a number")]
    NonNumericPrice,
}
