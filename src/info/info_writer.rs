//! Metadata-update file generation (`pdftk update_info`).
//!
//! The output uses the same `InfoBegin`/`<Group>Begin` grammar that
//! [`MetadataTree`](crate::dump::MetadataTree) parses, so a parsed dump can
//! be edited and written back:
//!
//! ```text
//! InfoBegin
//! InfoKey: Title
//! InfoValue: Annual Report
//! BookmarkBegin
//! BookmarkTitle: Summary
//! BookmarkLevel: 1
//! BookmarkPageNumber: 2
//! ```

use std::path::Path;

use indexmap::IndexMap;

use crate::dump::{GroupRecord, MetadataTree};
use crate::encoding;
use crate::error::Result;

/// Keys of the PDF document information directory (PDF 32000-1, 14.3.3).
///
/// Legacy flat input uses these at top level instead of nesting them under
/// `Info`; normalization folds them back.
pub const DOCUMENT_INFO_FIELDS: [&str; 9] = [
    "Title",
    "Author",
    "Subject",
    "Keywords",
    "Creator",
    "Producer",
    "CreationDate",
    "ModDate",
    "Trapped",
];

/// One entry of the metadata-update input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaEntry {
    /// Scalar entry: a legacy flat document-info value, or a read-only dump
    /// scalar (`NumberOfPages`, `PdfID0`, ...) that is dropped on output.
    Value(String),
    /// The canonical nested `Info` mapping.
    Info(IndexMap<String, String>),
    /// Entries of a repeating group such as `Bookmark` or `PageMedia`.
    Records(Vec<GroupRecord>),
}

impl From<&str> for MetaEntry {
    fn from(value: &str) -> Self {
        MetaEntry::Value(value.to_string())
    }
}

impl From<String> for MetaEntry {
    fn from(value: String) -> Self {
        MetaEntry::Value(value)
    }
}

impl From<IndexMap<String, String>> for MetaEntry {
    fn from(map: IndexMap<String, String>) -> Self {
        MetaEntry::Info(map)
    }
}

impl From<Vec<GroupRecord>> for MetaEntry {
    fn from(records: Vec<GroupRecord>) -> Self {
        MetaEntry::Records(records)
    }
}

/// Ordered metadata-update input, in the same shape as
/// [`MetadataTree`](crate::dump::MetadataTree) or the legacy flat shape with
/// document-info keys at top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoData {
    entries: IndexMap<String, MetaEntry>,
}

impl InfoData {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; a repeated key replaces the earlier entry.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<MetaEntry>) {
        self.entries.insert(key.into(), entry.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<MetaEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<MetadataTree> for InfoData {
    /// Carry a parsed dump over for editing and re-encoding. Read-only
    /// scalars come along as `Value` entries and are dropped on output.
    fn from(tree: MetadataTree) -> Self {
        let mut data = InfoData::new();
        for (key, value) in tree.scalars() {
            data.insert(key.clone(), MetaEntry::Value(value.clone()));
        }
        if !tree.info().is_empty() {
            data.insert("Info", MetaEntry::Info(tree.info().clone()));
        }
        for (name, records) in tree.groups() {
            data.insert(name.clone(), MetaEntry::Records(records.clone()));
        }
        data
    }
}

struct Normalized {
    info: IndexMap<String, String>,
    groups: IndexMap<String, Vec<GroupRecord>>,
}

/// Fold legacy flat document-info keys into the canonical `Info` mapping and
/// collect the repeating groups. Overlapping keys resolve last-writer-wins
/// in input traversal order.
fn normalize(data: &InfoData) -> Normalized {
    let mut info = IndexMap::new();
    let mut groups: IndexMap<String, Vec<GroupRecord>> = IndexMap::new();
    for (key, entry) in data.iter() {
        match entry {
            MetaEntry::Value(value) if DOCUMENT_INFO_FIELDS.contains(&key) => {
                info.insert(key.to_string(), value.clone());
            }
            MetaEntry::Value(_) => {
                log::debug!("dropping non-writable metadata scalar {key:?}");
            }
            MetaEntry::Info(map) => {
                for (info_key, value) in map {
                    info.insert(info_key.clone(), value.clone());
                }
            }
            MetaEntry::Records(records) => {
                groups
                    .entry(key.to_string())
                    .or_default()
                    .extend(records.iter().cloned());
            }
        }
    }
    Normalized { info, groups }
}

/// Writer for the metadata-update dialect.
///
/// ```
/// use pdftk_data::info::{InfoData, InfoWriter};
///
/// let data = InfoData::new().with("Creator", "pdftk_data");
/// let text = InfoWriter::new(data).to_text();
/// assert_eq!(text, "InfoBegin\nInfoKey: Creator\nInfoValue: pdftk_data\n");
/// ```
#[derive(Debug)]
pub struct InfoWriter {
    data: InfoData,
    encoding: String,
}

impl InfoWriter {
    /// Create a writer for the given metadata, targeting UTF-8 output.
    pub fn new(data: InfoData) -> Self {
        Self {
            data,
            encoding: "UTF-8".to_string(),
        }
    }

    /// Declare the target text encoding.
    ///
    /// When the target is not UTF-8, values are additionally XML-style
    /// escaped before transcoding, matching the plain-text-embedding rule of
    /// the legacy toolchain.
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Render the canonical UTF-8 text.
    pub fn to_text(&self) -> String {
        self.render(false)
    }

    /// Render the file body in the declared target encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let escape = !encoding::is_utf8(&self.encoding)?;
        encoding::encode(&self.render(escape), &self.encoding)
    }

    /// Render and write the file to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes()?)?;
        Ok(())
    }

    fn render(&self, escape: bool) -> String {
        let normalized = normalize(&self.data);
        let mut out = String::new();
        for (key, value) in &normalized.info {
            out.push_str("InfoBegin\n");
            render_line(&mut out, "Info", "Key", key, escape);
            render_line(&mut out, "Info", "Value", value, escape);
        }
        for (group, records) in &normalized.groups {
            for record in records {
                out.push_str(group);
                out.push_str("Begin\n");
                for (attr, value) in record {
                    render_line(&mut out, group, attr, value, escape);
                }
            }
        }
        out
    }
}

fn render_line(out: &mut String, prefix: &str, attr: &str, value: &str, escape: bool) {
    out.push_str(prefix);
    out.push_str(attr);
    out.push_str(": ");
    if escape {
        out.push_str(&encoding::xml_escape(value));
    } else {
        out.push_str(value);
    }
    out.push('\n');
}
