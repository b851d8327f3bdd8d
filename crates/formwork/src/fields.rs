//! Field helper constructors.

use crate::field::{Field, SelectOption};
use crate::validation;

/// Creates a plain text field.
pub fn text_field(name: &str, label: &str, required: bool) -> Field {
    apply_required(Field::new(name).label(label), required)
}

/// Creates an email field.
pub fn email_field(name: &str, label: &str, required: bool) -> Field {
    apply_required(
        Field::new(name)
            .label(label)
            .field_type("email")
            .rule(validation::email()),
        required,
    )
}

/// Creates a password field, always required.
pub fn password_field(name: &str, label: &str, min_length: Option<usize>) -> Field {
    let mut field = Field::new(name)
        .label(label)
        .field_type("password")
        .required(true)
        .rule(validation::required());
    if let Some(min) = min_length {
        field = field.rule(validation::min_length(min));
    }
    field
}

/// Creates a multi-line text field.
pub fn textarea_field(name: &str, label: &str, rows: u64, required: bool) -> Field {
    apply_required(
        Field::new(name)
            .label(label)
            .field_type("textarea")
            .attribute("rows", rows),
        required,
    )
}

/// Creates a checkbox field.
pub fn checkbox_field(name: &str, label: &str) -> Field {
    Field::new(name).label(label).field_type("checkbox")
}

/// Creates a select field with the given choices.
pub fn select_field(name: &str, label: &str, choices: Vec<SelectOption>, required: bool) -> Field {
    apply_required(
        Field::new(name)
            .label(label)
            .field_type("select")
            .select_options(choices),
        required,
    )
}

/// Creates a file upload field with an optional accept hint.
pub fn file_field(name: &str, label: &str, accept: &str, required: bool) -> Field {
    let mut field = Field::new(name).label(label).field_type("file");
    if !accept.is_empty() {
        field = field.attribute("accept", accept);
    }
    apply_required(field, required)
}

fn apply_required(field: Field, required: bool) -> Field {
    if required {
        field.required(true).rule(validation::required())
    } else {
        field
    }
}
