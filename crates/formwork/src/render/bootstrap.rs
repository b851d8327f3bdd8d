//! Bootstrap 5 rendering variants.

use super::{html_escape, FieldRenderer};
use crate::context::FieldContext;

/// Renderer dispatching on the field's type tag.
///
/// Unrecognized or empty tags fall back to the default input variant, which
/// carries the tag through as the HTML input type.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapRenderer;

impl FieldRenderer for BootstrapRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        match ctx.field.opts.field_type.as_str() {
            "textarea" => textarea(ctx),
            "checkbox" => checkbox(ctx),
            "file" => file_input(ctx),
            "select" => select(ctx),
            _ => text_input(ctx),
        }
    }
}

/// Always renders the default input variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputRenderer;

impl FieldRenderer for TextInputRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        text_input(ctx)
    }
}

/// Always renders the textarea variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaRenderer;

impl FieldRenderer for TextareaRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        textarea(ctx)
    }
}

/// Always renders the checkbox variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxRenderer;

impl FieldRenderer for CheckboxRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        checkbox(ctx)
    }
}

/// Always renders the select variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectRenderer;

impl FieldRenderer for SelectRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        select(ctx)
    }
}

/// Always renders the file input variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileInputRenderer;

impl FieldRenderer for FileInputRenderer {
    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        file_input(ctx)
    }
}

fn control_id(ctx: &FieldContext<'_>) -> String {
    ctx.option("id", format!("id_{}", ctx.field.name()))
}

fn control_class(base: &str, ctx: &FieldContext<'_>) -> String {
    let mut class = base.to_string();
    if !ctx.class.is_empty() {
        class.push(' ');
        class.push_str(&ctx.class);
    }
    if !ctx.error.is_empty() {
        class.push_str(" is-invalid");
    }
    class
}

fn label(ctx: &FieldContext<'_>, id: &str) -> String {
    if ctx.field.opts.label.is_empty() {
        return String::new();
    }
    let marker = if ctx.field.opts.required { " *" } else { "" };
    format!(
        r#"<label class="form-label" for="{id}">{}{marker}</label>"#,
        html_escape(&ctx.field.opts.label)
    )
}

fn feedback(ctx: &FieldContext<'_>) -> String {
    let mut out = String::new();
    if !ctx.error.is_empty() {
        out.push_str(&format!(
            r#"<div class="invalid-feedback">{}</div>"#,
            html_escape(&ctx.error)
        ));
    }
    if !ctx.field.opts.description.is_empty() {
        out.push_str(&format!(
            r#"<div class="form-text">{}</div>"#,
            html_escape(&ctx.field.opts.description)
        ));
    }
    out
}

fn field_group(ctx: &FieldContext<'_>, id: &str, control: &str) -> String {
    format!(
        r#"<div class="mb-3">{}{control}{}</div>"#,
        label(ctx, id),
        feedback(ctx)
    )
}

fn placeholder_attr(ctx: &FieldContext<'_>) -> String {
    if ctx.field.opts.placeholder.is_empty() {
        String::new()
    } else {
        format!(
            r#" placeholder="{}""#,
            html_escape(&ctx.field.opts.placeholder)
        )
    }
}

fn required_attr(ctx: &FieldContext<'_>) -> &'static str {
    if ctx.field.opts.required {
        " required"
    } else {
        ""
    }
}

fn text_input(ctx: &FieldContext<'_>) -> String {
    let id = control_id(ctx);
    let input_type = if ctx.field.opts.field_type.is_empty() {
        "text"
    } else {
        ctx.field.opts.field_type.as_str()
    };

    let value_attr = if ctx.value.is_empty() {
        String::new()
    } else {
        format!(r#" value="{}""#, html_escape(&ctx.value))
    };

    let control = format!(
        r#"<input type="{input_type}" class="{}" id="{id}" name="{}"{value_attr}{}{}>"#,
        control_class("form-control", ctx),
        ctx.field.name(),
        placeholder_attr(ctx),
        required_attr(ctx)
    );
    field_group(ctx, &id, &control)
}

fn textarea(ctx: &FieldContext<'_>) -> String {
    let id = control_id(ctx);
    let rows: u64 = ctx.option("rows", 4);

    let control = format!(
        r#"<textarea class="{}" id="{id}" name="{}" rows="{rows}"{}{}>{}</textarea>"#,
        control_class("form-control", ctx),
        ctx.field.name(),
        placeholder_attr(ctx),
        required_attr(ctx),
        html_escape(&ctx.value)
    );
    field_group(ctx, &id, &control)
}

fn checkbox(ctx: &FieldContext<'_>) -> String {
    let id = control_id(ctx);
    let checked = matches!(ctx.value.as_str(), "true" | "on" | "1");
    let checked_attr = if checked { " checked" } else { "" };

    let wrapper_class = if ctx.option("switch", false) {
        "form-check form-switch"
    } else {
        "form-check"
    };

    let label_html = if ctx.field.opts.label.is_empty() {
        String::new()
    } else {
        format!(
            r#"<label class="form-check-label" for="{id}">{}</label>"#,
            html_escape(&ctx.field.opts.label)
        )
    };

    format!(
        r#"<div class="mb-3"><div class="{wrapper_class}"><input class="{}" type="checkbox" id="{id}" name="{}" value="true"{checked_attr}{}>{label_html}</div>{}</div>"#,
        control_class("form-check-input", ctx),
        ctx.field.name(),
        required_attr(ctx),
        feedback(ctx)
    )
}

fn select(ctx: &FieldContext<'_>) -> String {
    let id = control_id(ctx);
    let choices = ctx.select_options(Vec::new());

    let mut options = String::new();
    if ctx.option("include_blank", false) {
        let blank_label: String = ctx.option("blank_label", "---------".to_string());
        options.push_str(&format!(
            r#"<option value="">{}</option>"#,
            html_escape(&blank_label)
        ));
    }
    for choice in &choices {
        let selected = if choice.value == ctx.value {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            html_escape(&choice.value),
            html_escape(&choice.label)
        ));
    }

    let control = format!(
        r#"<select class="{}" id="{id}" name="{}"{}>{options}</select>"#,
        control_class("form-select", ctx),
        ctx.field.name(),
        required_attr(ctx)
    );
    field_group(ctx, &id, &control)
}

fn file_input(ctx: &FieldContext<'_>) -> String {
    let id = control_id(ctx);

    let accept: String = ctx.option("accept", String::new());
    let accept_attr = if accept.is_empty() {
        String::new()
    } else {
        format!(r#" accept="{}""#, html_escape(&accept))
    };
    let multiple_attr = if ctx.option("multiple", false) {
        " multiple"
    } else {
        ""
    };

    // File inputs never re-emit a value.
    let control = format!(
        r#"<input type="file" class="{}" id="{id}" name="{}"{accept_attr}{multiple_attr}{}>"#,
        control_class("form-control", ctx),
        ctx.field.name(),
        required_attr(ctx)
    );
    field_group(ctx, &id, &control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, SelectOption};

    #[test]
    fn test_dispatch_checkbox_wins_over_other_attributes() {
        let field = Field::new("agree")
            .label("I agree")
            .field_type("checkbox")
            .attribute("rows", 10)
            .attribute("accept", ".pdf");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains("form-check"));
    }

    #[test]
    fn test_dispatch_unknown_type_falls_back_to_input() {
        let field = Field::new("thing").field_type("bogus");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"<input type="bogus""#));
        assert!(html.contains("form-control"));
    }

    #[test]
    fn test_default_input_carries_type_tag_through() {
        let field = Field::new("email").field_type("email").label("Email");
        let ctx = FieldContext::new(&field).with_value("jane@example.com");

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"value="jane@example.com""#));
    }

    #[test]
    fn test_input_required_and_placeholder() {
        let field = Field::new("username")
            .label("Username")
            .required(true)
            .placeholder("Enter username");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains("Username *"));
        assert!(html.contains(" required"));
        assert!(html.contains(r#"placeholder="Enter username""#));
    }

    #[test]
    fn test_textarea_rows_attribute() {
        let field = Field::new("bio").field_type("textarea").attribute("rows", 8);
        let ctx = FieldContext::new(&field).with_value("Hello");

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"rows="8""#));
        assert!(html.contains(">Hello</textarea>"));
    }

    #[test]
    fn test_textarea_rows_shape_mismatch_degrades_to_default() {
        let field = Field::new("bio")
            .field_type("textarea")
            .attribute("rows", "lots");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"rows="4""#));
    }

    #[test]
    fn test_checkbox_checked_states() {
        let field = Field::new("agree").label("I agree").field_type("checkbox");

        for value in ["true", "on", "1"] {
            let ctx = FieldContext::new(&field).with_value(value);
            assert!(checkbox(&ctx).contains(" checked"));
        }

        let ctx = FieldContext::new(&field).with_value("false");
        assert!(!checkbox(&ctx).contains(" checked"));
    }

    #[test]
    fn test_checkbox_switch_attribute() {
        let field = Field::new("enabled")
            .field_type("checkbox")
            .attribute("switch", true);
        let ctx = FieldContext::new(&field);

        assert!(checkbox(&ctx).contains("form-switch"));
    }

    #[test]
    fn test_select_marks_selected_choice() {
        let field = Field::new("status").field_type("select").select_options(vec![
            SelectOption::new("Draft", "draft"),
            SelectOption::new("Published", "published"),
        ]);
        let ctx = FieldContext::new(&field).with_value("published");

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains("form-select"));
        assert!(html.contains(r#"value="published" selected"#));
        assert!(!html.contains(r#"value="draft" selected"#));
    }

    #[test]
    fn test_select_blank_option() {
        let field = Field::new("status")
            .field_type("select")
            .attribute("include_blank", true)
            .select_options(vec![SelectOption::new("Draft", "draft")]);
        let ctx = FieldContext::new(&field);

        let html = select(&ctx);
        assert!(html.contains(r#"<option value="">---------</option>"#));
    }

    #[test]
    fn test_select_without_choices_still_renders() {
        let field = Field::new("status").field_type("select");
        let ctx = FieldContext::new(&field);

        let html = select(&ctx);
        assert!(html.contains("<select"));
        assert!(!html.contains("<option"));
    }

    #[test]
    fn test_file_input_accept_and_multiple() {
        let field = Field::new("document")
            .field_type("file")
            .attribute("accept", ".pdf,.txt")
            .attribute("multiple", true);
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"type="file""#));
        assert!(html.contains(r#"accept=".pdf,.txt""#));
        assert!(html.contains(" multiple"));
    }

    #[test]
    fn test_file_input_never_emits_value() {
        let field = Field::new("document").field_type("file");
        let ctx = FieldContext::new(&field).with_value("leaked");

        assert!(!file_input(&ctx).contains("leaked"));
    }

    #[test]
    fn test_error_adds_invalid_class_and_feedback() {
        let field = Field::new("email").field_type("email").label("Email");
        let ctx = FieldContext::new(&field).with_error("Enter a valid email address.");

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains("is-invalid"));
        assert!(html.contains(r#"<div class="invalid-feedback">Enter a valid email address.</div>"#));
    }

    #[test]
    fn test_description_renders_as_form_text() {
        let field = Field::new("email")
            .label("Email")
            .description("We will never share your email");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"<div class="form-text">We will never share your email</div>"#));
    }

    #[test]
    fn test_display_class_is_appended() {
        let field = Field::new("name");
        let ctx = FieldContext::new(&field).with_class("compact");

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"class="form-control compact""#));
    }

    #[test]
    fn test_id_attribute_overrides_default() {
        let field = Field::new("name").attribute("id", "custom-id");
        let ctx = FieldContext::new(&field);

        let html = BootstrapRenderer.render_field(&ctx);
        assert!(html.contains(r#"id="custom-id""#));
        assert!(!html.contains("id_name"));
    }

    #[test]
    fn test_fixed_variant_renderers_ignore_type_tag() {
        let field = Field::new("anything").field_type("text");
        let ctx = FieldContext::new(&field);

        assert!(TextareaRenderer.render_field(&ctx).contains("<textarea"));
        assert!(CheckboxRenderer
            .render_field(&ctx)
            .contains(r#"type="checkbox""#));
        assert!(FileInputRenderer
            .render_field(&ctx)
            .contains(r#"type="file""#));
        assert!(SelectRenderer.render_field(&ctx).contains("<select"));
        assert!(TextInputRenderer
            .render_field(&ctx)
            .contains(r#"type="text""#));
    }
}
