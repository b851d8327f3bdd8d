//! Field rendering.
//!
//! The [`FieldRenderer`] capability turns a render-time field context into
//! an HTML fragment. [`BootstrapRenderer`] dispatches on the field's type
//! tag; the fixed single-variant renderers always produce their one variant
//! and exist for composing forms from explicitly typed field groups.

mod bootstrap;

pub use bootstrap::{
    BootstrapRenderer, CheckboxRenderer, FileInputRenderer, SelectRenderer, TextInputRenderer,
    TextareaRenderer,
};

use std::collections::HashMap;

use crate::context::FieldContext;
use crate::field::Field;

/// Trait for rendering a single field from its context.
pub trait FieldRenderer {
    /// Renders the field as an HTML fragment.
    ///
    /// Rendering is total: any well-formed context produces output, and
    /// attribute values of an unexpected shape degrade to their defaults.
    fn render_field(&self, ctx: &FieldContext<'_>) -> String;
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders a complete form from the declared fields.
///
/// A fresh [`FieldContext`] is assembled per field: the first submitted
/// value from `values` (file fields are never value-bound) and the field's
/// message from `errors`.
pub fn render_form(
    renderer: &dyn FieldRenderer,
    fields: &[Field],
    values: &HashMap<String, Vec<String>>,
    errors: &HashMap<String, String>,
    action: &str,
    method: &str,
) -> String {
    let mut out = format!(
        r#"<form action="{}" method="{}">"#,
        html_escape(action),
        html_escape(method)
    );

    for field in fields {
        let mut ctx = FieldContext::new(field);
        if !field.is_file() {
            if let Some(value) = values.get(field.name()).and_then(|values| values.first()) {
                ctx = ctx.with_value(value.as_str());
            }
        }
        if let Some(error) = errors.get(field.name()) {
            ctx = ctx.with_error(error.as_str());
        }
        out.push_str(&renderer.render_field(&ctx));
    }

    out.push_str(r#"<button type="submit" class="btn btn-primary">Submit</button></form>"#);
    out
}
