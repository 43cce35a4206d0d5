//! # pdftk_data
//!
//! Parsers and writers for the text formats spoken by the `pdftk`
//! command-line tool.
//!
//! ## Reading direction
//!
//! - [`dump::FieldDump`]: form-field dumps (`dump_data_fields`), which are
//!   `---`-delimited blocks of `Key: Value` lines with multi-line values and
//!   repeated keys
//! - [`dump::MetadataTree`]: metadata dumps (`dump_data`) with their
//!   `InfoBegin`/`BookmarkBegin`/`PageMediaBegin` grouped records
//!
//! ## Writing direction
//!
//! - [`fdf::FdfWriter`]: FDF form-fill files with UTF-16BE string literals
//! - [`fdf::XfdfWriter`]: XFDF form-fill files with nested and multi-value
//!   fields
//! - [`info::InfoWriter`]: metadata-update files for `update_info`
//!
//! Process invocation, shell quoting and temp-file handling are left to the
//! caller; this crate only produces and consumes the file contents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdftk_data::{FieldDump, FormData, XfdfWriter};
//!
//! # fn main() -> pdftk_data::Result<()> {
//! // Parse the output of `pdftk form.pdf dump_data_fields`
//! let dump = FieldDump::parse(&std::fs::read_to_string("fields.txt")?)?;
//! for record in &dump {
//!     println!("{:?}: {:?}", record.name(), record.value());
//! }
//!
//! // Build an XFDF file for `pdftk form.pdf fill_form fill.xfdf ...`
//! let data = FormData::new()
//!     .with("Firstname", "John")
//!     .with("address.street", "Some Street");
//! XfdfWriter::new(data).write_to_file("fill.xfdf")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Shared text-encoding boundary
pub mod encoding;

// Dump parsing (reading direction)
pub mod dump;

// Data-file generation (writing direction)
pub mod fdf;
pub mod info;

pub use dump::{AttrValue, FieldDump, FieldRecord, FieldType, GroupRecord, MetadataTree};
pub use error::{Error, Result};
pub use fdf::{FdfWriter, FieldInput, FormData, XfdfWriter};
pub use info::{InfoData, InfoWriter, MetaEntry};
