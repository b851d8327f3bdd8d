//! Validation rule metadata.
//!
//! Rules are descriptors only: they attach to fields at declaration time and
//! travel with them. Interpreting a rule against a submitted value is the
//! hosting application's concern.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validation rule attached to a field at declaration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Rule identifier ("required", "min_length", ...).
    pub name: String,
    /// Rule parameters.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, Value>,
    /// Custom error message overriding the evaluator's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationRule {
    /// Creates a rule with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: HashMap::new(),
            message: None,
        }
    }

    /// Sets a rule parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets a custom error message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Rule requiring a non-empty value.
pub fn required() -> ValidationRule {
    ValidationRule::new("required")
}

/// Rule enforcing a minimum length.
pub fn min_length(min: usize) -> ValidationRule {
    ValidationRule::new("min_length").param("min", min as u64)
}

/// Rule enforcing a maximum length.
pub fn max_length(max: usize) -> ValidationRule {
    ValidationRule::new("max_length").param("max", max as u64)
}

/// Rule requiring a well-formed email address.
pub fn email() -> ValidationRule {
    ValidationRule::new("email")
}

/// Rule requiring an http(s) URL.
pub fn url() -> ValidationRule {
    ValidationRule::new("url")
}

/// Rule matching a regular expression pattern.
pub fn pattern(pattern: impl Into<String>) -> ValidationRule {
    ValidationRule::new("pattern").param("pattern", pattern.into())
}

/// Rule constraining a numeric value to a range.
pub fn range(min: Option<f64>, max: Option<f64>) -> ValidationRule {
    let mut rule = ValidationRule::new("range");
    if let Some(min) = min {
        rule = rule.param("min", min);
    }
    if let Some(max) = max {
        rule = rule.param("max", max);
    }
    rule
}
