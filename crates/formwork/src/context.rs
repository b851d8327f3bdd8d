//! Render-time field context and typed option lookup.

use serde::de::DeserializeOwned;

use crate::field::{Field, SelectOption, SELECT_OPTIONS_KEY};

/// The per-render view of a field: the field bound to its current value, an
/// optional validation error, and a display class.
///
/// Constructed fresh for every render call; never persisted.
#[derive(Debug, Clone)]
pub struct FieldContext<'a> {
    /// The field being rendered.
    pub field: &'a Field,
    /// Currently bound/submitted value, empty if none.
    pub value: String,
    /// Validation error message, empty if none.
    pub error: String,
    /// Display/styling hint.
    pub class: String,
}

impl<'a> FieldContext<'a> {
    /// Creates a context for a field with no bound value.
    pub fn new(field: &'a Field) -> Self {
        Self {
            field,
            value: String::new(),
            error: String::new(),
            class: String::new(),
        }
    }

    /// Sets the bound value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the validation error message.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// Sets the display class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Looks up an attribute by name, decoding it as `T`.
    ///
    /// A missing key, or a present value whose shape does not decode as
    /// `T`, yields `default`. The lookup never fails.
    pub fn option<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        self.field
            .opts
            .attributes
            .get(name)
            .and_then(|raw| serde_json::from_value(raw.clone()).ok())
            .unwrap_or(default)
    }

    /// Returns the select choices stored under the reserved options key,
    /// falling back to `default` when absent or malformed.
    pub fn select_options(&self, default: Vec<SelectOption>) -> Vec<SelectOption> {
        self.field
            .opts
            .options
            .get(SELECT_OPTIONS_KEY)
            .and_then(|raw| serde_json::from_value(raw.clone()).ok())
            .unwrap_or(default)
    }
}
