//! Form-fill data file generation (FDF family).
//!
//! pdftk's `fill_form` operation reads its input values from an intermediary
//! file in one of two dialects:
//!
//! - [`FdfWriter`]: FDF (Forms Data Format), the legacy binary-ish format
//!   with UTF-16BE string literals
//! - [`XfdfWriter`]: XFDF (XML Forms Data Format), the XML representation
//!   with support for nested and multi-value fields
//!
//! Both writers consume the same [`FormData`] input.
//!
//! ## Example
//!
//! ```no_run
//! use pdftk_data::fdf::{FdfWriter, FormData, XfdfWriter};
//!
//! # fn main() -> pdftk_data::Result<()> {
//! let data = FormData::new()
//!     .with("Firstname", "John")
//!     .with("address.street", "Some Street")
//!     .with("Pets", vec!["Cat", "Mouse"]);
//!
//! XfdfWriter::new(data.clone()).write_to_file("fill.xfdf")?;
//! FdfWriter::new(data).write_to_file("fill.fdf")?;
//! # Ok(())
//! # }
//! ```

mod fdf_writer;
mod form_data;
mod xfdf_writer;

pub use fdf_writer::FdfWriter;
pub use form_data::{FieldInput, FormData};
pub use xfdf_writer::XfdfWriter;
