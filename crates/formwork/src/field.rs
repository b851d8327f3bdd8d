//! Runtime-declared form fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::ValidationRule;

/// Reserved key under which select choices are stored in a field's options
/// map. Must stay stable so declaration and rendering interoperate.
pub const SELECT_OPTIONS_KEY: &str = "_select_options";

/// Configuration bag backing a [`Field`].
///
/// Built from fixed defaults through consuming setters applied in call
/// order. Scalar setters are last-wins; `attributes`, `options` and
/// `validation` replace their collection wholesale, while `attribute`,
/// `select_options` and `rule` insert into the existing one.
#[derive(Debug, Clone)]
pub struct FieldOptions {
    /// Field label.
    pub label: String,
    /// Type tag ("text", "textarea", "checkbox", "select", "file", ...).
    pub field_type: String,
    /// Whether the field is required.
    pub required: bool,
    /// Placeholder text.
    pub placeholder: String,
    /// Help text shown under the control.
    pub description: String,
    /// Free-form render hints.
    pub attributes: HashMap<String, Value>,
    /// Free-form named payloads (select choices live here).
    pub options: HashMap<String, Value>,
    /// Validation rules attached at declaration time.
    pub validation: Vec<ValidationRule>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            field_type: "text".to_string(),
            required: false,
            placeholder: String::new(),
            description: String::new(),
            attributes: HashMap::new(),
            options: HashMap::new(),
            validation: Vec::new(),
        }
    }
}

impl FieldOptions {
    /// Creates options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the type tag.
    #[must_use]
    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the whole attribute map.
    #[must_use]
    pub fn attributes(mut self, attributes: HashMap<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Inserts a single attribute, keeping the rest of the map.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Replaces the whole validation rule list.
    #[must_use]
    pub fn validation(mut self, rules: Vec<ValidationRule>) -> Self {
        self.validation = rules;
        self
    }

    /// Appends a single validation rule.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.validation.push(rule);
        self
    }

    /// Replaces the whole named-options map.
    #[must_use]
    pub fn options(mut self, options: HashMap<String, Value>) -> Self {
        self.options = options;
        self
    }

    /// Stores select choices under [`SELECT_OPTIONS_KEY`], keeping any other
    /// named options.
    #[must_use]
    pub fn select_options(mut self, choices: Vec<SelectOption>) -> Self {
        let value = serde_json::to_value(choices).unwrap_or(Value::Null);
        self.options.insert(SELECT_OPTIONS_KEY.to_string(), value);
        self
    }
}

/// A form field declared at runtime.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    /// Field configuration.
    pub opts: FieldOptions,
}

impl Field {
    /// Creates a field with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opts: FieldOptions::new(),
        }
    }

    /// Creates a field from pre-built options.
    pub fn with_options(name: impl Into<String>, opts: FieldOptions) -> Self {
        Self {
            name: name.into(),
            opts,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this field is a file input.
    pub fn is_file(&self) -> bool {
        self.opts.field_type == "file"
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.opts = self.opts.label(label);
        self
    }

    /// Sets the type tag.
    #[must_use]
    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.opts = self.opts.field_type(field_type);
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.opts = self.opts.required(required);
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.opts = self.opts.placeholder(placeholder);
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.opts = self.opts.description(description);
        self
    }

    /// Replaces the whole attribute map.
    #[must_use]
    pub fn attributes(mut self, attributes: HashMap<String, Value>) -> Self {
        self.opts = self.opts.attributes(attributes);
        self
    }

    /// Inserts a single attribute, keeping the rest of the map.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.opts = self.opts.attribute(name, value);
        self
    }

    /// Replaces the whole validation rule list.
    #[must_use]
    pub fn validation(mut self, rules: Vec<ValidationRule>) -> Self {
        self.opts = self.opts.validation(rules);
        self
    }

    /// Appends a single validation rule.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.opts = self.opts.rule(rule);
        self
    }

    /// Replaces the whole named-options map.
    #[must_use]
    pub fn options(mut self, options: HashMap<String, Value>) -> Self {
        self.opts = self.opts.options(options);
        self
    }

    /// Stores select choices under [`SELECT_OPTIONS_KEY`], keeping any other
    /// named options.
    #[must_use]
    pub fn select_options(mut self, choices: Vec<SelectOption>) -> Self {
        self.opts = self.opts.select_options(choices);
        self
    }
}

/// Returns whether any declared field is a file input.
pub fn has_file_field(fields: &[Field]) -> bool {
    fields.iter().any(Field::is_file)
}

/// A single choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable choice label.
    pub label: String,
    /// Submitted value.
    pub value: String,
}

impl SelectOption {
    /// Creates a new select option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
