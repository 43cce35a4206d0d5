//! Parsers for pdftk dump output.
//!
//! pdftk reports form fields (`dump_data_fields`) and document metadata
//! (`dump_data`) as line-oriented `Key: Value` text. The submodules turn
//! those dumps into ordered, structured records:
//!
//! - [`fields`] turns `---`-delimited field blocks into a [`FieldDump`]
//! - [`metadata`] turns `<Group>Begin` grouped records into a [`MetadataTree`]
//!
//! ## Example
//!
//! ```
//! use pdftk_data::dump::FieldDump;
//!
//! # fn main() -> pdftk_data::Result<()> {
//! let dump = FieldDump::parse("---\nFieldType: Text\nFieldName: email\n")?;
//! assert_eq!(dump.records()[0].name(), Some("email"));
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod metadata;

pub use fields::{AttrValue, FieldDump, FieldRecord, FieldType};
pub use metadata::{GroupRecord, MetadataTree};
