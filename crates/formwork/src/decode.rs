//! Form submission decoding.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use formwork_http::{multipart, urlencoded, ParseError, Request};
use tracing::debug;

use crate::error::{FormError, Result};
use crate::field::{has_file_field, Field};

/// Default upper bound on accepted request bodies (10 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// An uploaded file decoded from a multipart submission.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name declared by the client.
    pub file_name: String,
    /// Declared content type, if any.
    pub content_type: Option<String>,
    /// File payload.
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Returns the payload size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns a reader over the payload.
    pub fn reader(&self) -> impl Read + '_ {
        Cursor::new(self.data.as_slice())
    }
}

/// Decodes one submission into per-field values and files.
///
/// The declared field set steers parser selection and later rendering; it is
/// not a filter. Submitted names outside the declared set pass through, and
/// it is the caller's responsibility to read only what it declared.
#[derive(Debug, Clone)]
pub struct FormDecoder {
    fields: Vec<Field>,
    max_body_size: usize,
    /// Submitted values per field name, each in submission order.
    pub values: HashMap<String, Vec<String>>,
    /// Uploaded files per field name.
    pub files: HashMap<String, UploadedFile>,
}

impl FormDecoder {
    /// Creates a decoder for the declared field set.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            values: HashMap::new(),
            files: HashMap::new(),
        }
    }

    /// Sets the maximum accepted body size in bytes.
    #[must_use]
    pub fn max_body_size(mut self, limit: usize) -> Self {
        self.max_body_size = limit;
        self
    }

    /// Returns the declared fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the first submitted value for a field, if any.
    ///
    /// An absent name and a present-but-empty value are distinct outcomes:
    /// the former yields `None`, the latter `Some("")`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes one request into `values` and `files`.
    ///
    /// Multipart bodies populate both maps; everything else takes the
    /// URL-encoded path best-effort and leaves `files` empty. Both maps are
    /// replaced wholesale on success; on error they keep their prior state.
    /// An empty body decodes to empty maps without error.
    pub fn handle(&mut self, req: &Request) -> Result<()> {
        if req.body.is_empty() {
            self.values = HashMap::new();
            self.files = HashMap::new();
            return Ok(());
        }

        if req.body.len() > self.max_body_size {
            return Err(FormError::BodyTooLarge {
                limit: self.max_body_size,
            });
        }

        let content_type = req.content_type().unwrap_or("");
        let is_multipart = content_type.to_ascii_lowercase().starts_with("multipart/");

        if has_file_field(&self.fields) && !is_multipart {
            // Parser-selection hint only; the file fields receive no data.
            debug!(
                content_type = %content_type,
                "file field declared but request is not multipart"
            );
        }

        if is_multipart {
            let boundary = multipart::parse_boundary(content_type)?;
            let parts = multipart::parse(&req.body, &boundary)?;

            let mut values: HashMap<String, Vec<String>> = HashMap::new();
            let mut files = HashMap::new();
            for part in parts {
                if let Some(file_name) = part.file_name {
                    // Last file wins when a name repeats.
                    files.insert(
                        part.name,
                        UploadedFile {
                            file_name,
                            content_type: part.content_type,
                            data: part.data,
                        },
                    );
                } else {
                    let value =
                        String::from_utf8(part.data).map_err(|_| ParseError::InvalidUtf8)?;
                    values.entry(part.name).or_default().push(value);
                }
            }

            debug!(
                values = values.len(),
                files = files.len(),
                "decoded multipart form"
            );
            self.values = values;
            self.files = files;
        } else {
            let mut values: HashMap<String, Vec<String>> = HashMap::new();
            for (name, value) in urlencoded::parse(&req.body)? {
                values.entry(name).or_default().push(value);
            }

            debug!(values = values.len(), "decoded url-encoded form");
            self.values = values;
            self.files = HashMap::new();
        }

        Ok(())
    }
}
