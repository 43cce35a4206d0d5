//! Text encoding and escaping helpers shared by the parsers and writers.
//!
//! pdftk reads and writes plain text in whatever encoding the caller declares
//! on the command line, so both directions of this crate cross a byte/text
//! boundary. Encoding labels are resolved through `encoding_rs` using the
//! WHATWG label registry ("UTF-8", "ISO-8859-2", "windows-1252", ...).
//! Decoding and encoding are strict: malformed or unmappable input surfaces
//! as [`Error::Transcode`] instead of silently inserting replacement
//! characters.

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};

/// Resolve an encoding label such as `"UTF-8"` or `"ISO-8859-2"`.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
}

/// Whether the label names the canonical UTF-8 encoding.
pub fn is_utf8(label: &str) -> Result<bool> {
    Ok(resolve(label)? == UTF_8)
}

/// Decode bytes in the given encoding into a UTF-8 string.
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = resolve(label)?;
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::Transcode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Encode a UTF-8 string into the given encoding.
pub fn encode(text: &str, label: &str) -> Result<Vec<u8>> {
    let encoding = resolve(label)?;
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(Error::Transcode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(bytes.into_owned())
}

/// Escape the five XML special characters for element text and attributes.
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
