//! `multipart/form-data` body parsing.

use crate::error::{ParseError, Result};

/// A single decoded part of a multipart body.
#[derive(Debug, Clone)]
pub struct Part {
    /// Field name from the Content-Disposition header.
    pub name: String,
    /// File name, present for file parts.
    pub file_name: Option<String>,
    /// Declared content type of the part, if any.
    pub content_type: Option<String>,
    /// Raw part payload.
    pub data: Vec<u8>,
}

impl Part {
    /// Returns whether this part carries an uploaded file.
    pub fn is_file(&self) -> bool {
        self.file_name.is_some()
    }
}

/// Extracts the boundary parameter from a multipart Content-Type value.
pub fn parse_boundary(content_type: &str) -> Result<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| {
            let (key, value) = param.trim().split_once('=')?;
            key.eq_ignore_ascii_case("boundary")
                .then(|| value.trim_matches('"').to_string())
        })
        .find(|boundary| !boundary.is_empty())
        .ok_or(ParseError::MissingBoundary)
}

/// Parses a buffered `multipart/form-data` body into its parts.
///
/// Parts are returned in wire order. Framing violations (missing boundary,
/// truncated part, missing CRLF separators) are reported as errors rather
/// than yielding partial results.
pub fn parse(body: &[u8], boundary: &str) -> Result<Vec<Part>> {
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();

    let opening = find(body, delimiter)
        .ok_or_else(|| ParseError::malformed("opening boundary not found"))?;
    let mut pos = opening + delimiter.len();
    let mut parts = Vec::new();

    // Each iteration consumes one part; "--" after a delimiter closes the body.
    while !body[pos..].starts_with(b"--") {
        if !body[pos..].starts_with(b"\r\n") {
            return Err(ParseError::malformed("boundary not followed by CRLF"));
        }
        let start = pos + 2;
        let len = find(&body[start..], delimiter)
            .ok_or_else(|| ParseError::malformed("part is missing its closing boundary"))?;
        let segment = body[start..start + len]
            .strip_suffix(b"\r\n")
            .ok_or_else(|| ParseError::malformed("part payload is not CRLF-terminated"))?;

        parts.push(parse_part(segment)?);
        pos = start + len + delimiter.len();
    }

    Ok(parts)
}

fn parse_part(segment: &[u8]) -> Result<Part> {
    let split = find(segment, b"\r\n\r\n")
        .ok_or_else(|| ParseError::malformed("part has no header separator"))?;
    let (header_bytes, data) = (&segment[..split], &segment[split + 4..]);

    let headers = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::malformed("part headers are not valid UTF-8"))?;

    let mut name = None;
    let mut file_name = None;
    let mut content_type = None;

    for line in headers.split("\r\n") {
        let Some((header, value)) = line.split_once(':') else {
            continue;
        };
        if header.trim().eq_ignore_ascii_case("content-disposition") {
            for param in value.split(';').skip(1) {
                let Some((key, raw)) = param.trim().split_once('=') else {
                    continue;
                };
                let raw = raw.trim_matches('"').to_string();
                match key {
                    "name" => name = Some(raw),
                    "filename" => file_name = Some(raw),
                    _ => {}
                }
            }
        } else if header.trim().eq_ignore_ascii_case("content-type") {
            content_type = Some(value.trim().to_string());
        }
    }

    let name = name.ok_or_else(|| ParseError::malformed("part has no field name"))?;

    Ok(Part {
        name,
        file_name,
        content_type,
        data: data.to_vec(),
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "X-FORMWORK-TEST";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, file_name: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n"
        )
    }

    fn close() -> String {
        format!("--{BOUNDARY}--\r\n")
    }

    #[test]
    fn test_parse_boundary() {
        let ct = format!("multipart/form-data; boundary={BOUNDARY}");
        assert_eq!(parse_boundary(&ct).unwrap(), BOUNDARY);

        let quoted = format!("multipart/form-data; boundary=\"{BOUNDARY}\"");
        assert_eq!(parse_boundary(&quoted).unwrap(), BOUNDARY);

        assert!(matches!(
            parse_boundary("multipart/form-data"),
            Err(ParseError::MissingBoundary)
        ));
    }

    #[test]
    fn test_parse_text_and_file_parts() {
        let body = format!(
            "{}{}{}",
            text_part("name", "John Doe"),
            file_part("document", "test.txt", "test file content"),
            close()
        );

        let parts = parse(body.as_bytes(), BOUNDARY).unwrap();
        assert_eq!(parts.len(), 2);

        assert_eq!(parts[0].name, "name");
        assert!(!parts[0].is_file());
        assert_eq!(parts[0].data, b"John Doe");

        assert_eq!(parts[1].name, "document");
        assert_eq!(parts[1].file_name.as_deref(), Some("test.txt"));
        assert_eq!(parts[1].content_type.as_deref(), Some("text/plain"));
        assert_eq!(parts[1].data, b"test file content");
    }

    #[test]
    fn test_parse_preserves_wire_order() {
        let body = format!(
            "{}{}{}{}",
            text_part("tag", "a"),
            text_part("tag", "b"),
            text_part("other", "c"),
            close()
        );

        let parts = parse(body.as_bytes(), BOUNDARY).unwrap();
        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["tag", "tag", "other"]);
        assert_eq!(parts[0].data, b"a");
        assert_eq!(parts[1].data, b"b");
    }

    #[test]
    fn test_parse_part_with_crlf_in_payload() {
        let body = format!("{}{}", text_part("note", "line one\r\nline two"), close());
        let parts = parse(body.as_bytes(), BOUNDARY).unwrap();
        assert_eq!(parts[0].data, b"line one\r\nline two");
    }

    #[test]
    fn test_parse_missing_opening_boundary() {
        assert!(matches!(
            parse(b"no delimiters here", BOUNDARY),
            Err(ParseError::MalformedMultipart(_))
        ));
    }

    #[test]
    fn test_parse_truncated_body() {
        let body = text_part("name", "John");
        // No closing delimiter after the part.
        let truncated = &body[..body.len() - 2];
        assert!(matches!(
            parse(truncated.as_bytes(), BOUNDARY),
            Err(ParseError::MalformedMultipart(_))
        ));
    }

    #[test]
    fn test_parse_part_without_name_is_rejected() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data\r\n\r\nvalue\r\n{}",
            close()
        );
        assert!(matches!(
            parse(body.as_bytes(), BOUNDARY),
            Err(ParseError::MalformedMultipart(_))
        ));
    }
}
