//! URL-encoded form body parsing.

use crate::error::{ParseError, Result};

/// Parses an `application/x-www-form-urlencoded` body into key/value pairs.
///
/// Submission order is preserved and repeated names are kept as separate
/// pairs; collapsing them into a multi-map is the caller's concern.
pub fn parse(body: &[u8]) -> Result<Vec<(String, String)>> {
    let body = std::str::from_utf8(body).map_err(|_| ParseError::InvalidUtf8)?;

    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode(key)?, decode(value)?))
        })
        .collect()
}

/// Decodes percent escapes and `+` separators in a single component.
pub fn decode(component: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(component.len());
    let mut iter = component.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let (Some(hi), Some(lo)) = (iter.next(), iter.next()) else {
                    return Err(ParseError::InvalidEscape(component.to_string()));
                };
                let byte = std::str::from_utf8(&[hi, lo])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| ParseError::InvalidEscape(component.to_string()))?;
                bytes.push(byte);
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
    }

    String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)
}
