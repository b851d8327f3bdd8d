//! # formwork
//!
//! Runtime-declared form fields with submission decoding and pluggable
//! Bootstrap 5 rendering.
//!
//! This crate provides:
//! - Field declarations built at runtime (not bound to compile-time structs)
//! - A form decoder turning one HTTP submission into per-field values and
//!   uploaded files
//! - A renderer capability dispatching on each field's type tag
//! - Validation rule metadata that travels with the field declarations
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork::{BootstrapRenderer, Field, FieldContext, FieldRenderer, FormDecoder};
//! use formwork_http::Request;
//!
//! // Declare fields at runtime.
//! let fields = vec![
//!     Field::new("name").label("Name").required(true),
//!     Field::new("email").label("Email").field_type("email"),
//! ];
//!
//! // Decode a submission.
//! let req = Request::post("/submit")
//!     .header("Content-Type", "application/x-www-form-urlencoded")
//!     .body("name=Jane+Doe&email=jane%40example.com");
//! let mut form = FormDecoder::new(fields);
//! form.handle(&req).unwrap();
//! assert_eq!(form.value("name"), Some("Jane Doe"));
//!
//! // Render each field bound to its submitted value.
//! let renderer = BootstrapRenderer;
//! for field in form.fields() {
//!     let ctx = FieldContext::new(field)
//!         .with_value(form.value(field.name()).unwrap_or(""));
//!     let html = renderer.render_field(&ctx);
//!     assert!(html.contains(field.name()));
//! }
//! ```
//!
//! ## Attributes and named options
//!
//! Fields carry free-form JSON attribute and option maps; renderer variants
//! read the keys they recognize through a typed lookup that falls back to a
//! default on a missing key or shape mismatch:
//!
//! ```rust
//! use formwork::{Field, FieldContext, SelectOption};
//!
//! let field = Field::new("country")
//!     .field_type("select")
//!     .attribute("include_blank", true)
//!     .select_options(vec![SelectOption::new("France", "fr")]);
//!
//! let ctx = FieldContext::new(&field);
//! assert!(ctx.option("include_blank", false));
//! assert_eq!(ctx.select_options(Vec::new()).len(), 1);
//! ```
//!
//! ## Renderers
//!
//! [`BootstrapRenderer`] selects among {input, textarea, checkbox, select,
//! file input} by type tag, falling back to the input variant for unknown
//! tags. The fixed renderers ([`render::TextareaRenderer`],
//! [`render::CheckboxRenderer`], ...) always produce one variant and suit
//! forms composed from explicitly typed field groups.

mod context;
mod decode;
mod error;
mod field;
pub mod fields;
pub mod render;
pub mod validation;

pub use context::FieldContext;
pub use decode::{FormDecoder, UploadedFile, DEFAULT_MAX_BODY_SIZE};
pub use error::{FormError, Result};
pub use field::{has_file_field, Field, FieldOptions, SelectOption, SELECT_OPTIONS_KEY};
pub use render::{html_escape, render_form, BootstrapRenderer, FieldRenderer};
pub use validation::ValidationRule;
