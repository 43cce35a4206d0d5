//! FDF form-fill file generation.
//!
//! pdftk's `fill_form` operation accepts FDF 1.2 files. Field names and
//! values are embedded as UTF-16BE literal strings with a leading byte-order
//! mark, which keeps the full Unicode range intact without relying on the
//! PDFDocEncoding subset. The embedded code units make the output binary, so
//! the writer renders bytes, not text.

use std::io::Write;
use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};

use crate::dump::FieldDump;
use crate::error::Result;
use crate::fdf::form_data::{FieldInput, FormData};

/// FDF header opening the `/Fields` array of the catalog object.
const FDF_HEADER: &str = "%FDF-1.2\n1 0 obj<</FDF<< /Fields[\n";

/// FDF footer closing the catalog object.
const FDF_FOOTER: &str = "] >> >>\nendobj\ntrailer\n<</Root 1 0 R>>\n%%EOF\n";

/// Writer for the legacy FDF form-fill dialect.
///
/// ```
/// use pdftk_data::fdf::{FdfWriter, FormData};
///
/// # fn main() -> pdftk_data::Result<()> {
/// let data = FormData::new().with("name", "John Doe");
/// let bytes = FdfWriter::new(data).to_bytes()?;
/// assert!(bytes.starts_with(b"%FDF-1.2"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct FdfWriter<'a> {
    data: FormData,
    lookup: Option<&'a FieldDump>,
}

impl<'a> FdfWriter<'a> {
    /// Create a writer for the given form data.
    pub fn new(data: FormData) -> Self {
        Self { data, lookup: None }
    }

    /// Use a parsed field dump to map boolean inputs onto each field's state
    /// options.
    pub fn with_field_lookup(mut self, dump: &'a FieldDump) -> Self {
        self.lookup = Some(dump);
        self
    }

    /// Render the FDF file body.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.write_all(FDF_HEADER.as_bytes())?;
        for (name, value) in self.data.iter() {
            self.write_field(&mut out, name, value)?;
        }
        out.write_all(FDF_FOOTER.as_bytes())?;
        Ok(out)
    }

    /// Render and write the file to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes()?)?;
        Ok(())
    }

    fn write_field(&self, out: &mut Vec<u8>, name: &str, value: &FieldInput) -> Result<()> {
        out.write_all(b"<</T(")?;
        write_utf16(out, name, false)?;
        out.write_all(b")/V")?;
        match value {
            FieldInput::Text(text) => write_string(out, text)?,
            FieldInput::Null => write_string(out, "")?,
            FieldInput::Boolean(state) => write_string(out, &self.state_literal(name, *state))?,
            FieldInput::List(values) => {
                out.write_all(b"[")?;
                for item in values {
                    write_string(out, item)?;
                }
                out.write_all(b"]")?;
            }
        }
        out.write_all(b">>\n")?;
        Ok(())
    }

    /// Map a boolean onto the field's first (true) or second (false) state
    /// option. Without a matching field the raw literal passes through.
    fn state_literal(&self, name: &str, state: bool) -> String {
        let options = self
            .lookup
            .and_then(|dump| dump.record_with_name(name))
            .map(|record| record.state_options())
            .unwrap_or(&[]);
        let index = usize::from(!state);
        match options.get(index) {
            Some(option) => option.clone(),
            None => {
                log::warn!("no state option {index} for field {name:?}, writing raw boolean");
                if state {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
        }
    }
}

fn write_string(out: &mut Vec<u8>, text: &str) -> std::io::Result<()> {
    out.write_all(b"(")?;
    write_utf16(out, text, true)?;
    out.write_all(b")")
}

/// Write `text` as UTF-16BE code units behind a byte-order mark.
///
/// Parenthesis bytes in values are escaped so that no code unit can
/// terminate the surrounding string literal.
fn write_utf16(out: &mut Vec<u8>, text: &str, escape: bool) -> std::io::Result<()> {
    out.write_u16::<BigEndian>(0xFEFF)?;
    for unit in text.encode_utf16() {
        if escape {
            for byte in unit.to_be_bytes() {
                if byte == b'(' || byte == b')' {
                    out.write_u8(b'\\')?;
                }
                out.write_u8(byte)?;
            }
        } else {
            out.write_u16::<BigEndian>(unit)?;
        }
    }
    Ok(())
}
