//! Metadata-update file generation.
//!
//! The inverse of [`dump::metadata`](crate::dump::metadata): renders
//! document information, bookmarks and page groups back into the
//! `InfoBegin`/`<Group>Begin` text that `pdftk update_info` consumes.

mod info_writer;

pub use info_writer::{InfoData, InfoWriter, MetaEntry, DOCUMENT_INFO_FIELDS};
