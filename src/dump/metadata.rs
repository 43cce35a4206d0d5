//! Document-metadata dump parsing (`pdftk dump_data`).
//!
//! The dump mixes three kinds of lines:
//!
//! ```text
//! InfoBegin
//! InfoKey: Creator
//! InfoValue: Writer
//! PdfID0: 8b93f76a0b28b720d0dee9a6eb2a780a
//! NumberOfPages: 5
//! BookmarkBegin
//! BookmarkTitle: First bookmark
//! BookmarkLevel: 1
//! BookmarkPageNumber: 1
//! ```
//!
//! A `<Name>Begin` line opens a repeating group whose attribute lines carry
//! the group name as a prefix; `InfoKey`/`InfoValue` pairs collapse into one
//! document-information mapping; everything else that looks like
//! `Key: Value` is a top-level scalar. The parser is a small state machine
//! over classified lines, per group instance.

use indexmap::IndexMap;
use serde::Serialize;

use crate::encoding;
use crate::error::{Error, Result};

/// Attribute map of one repeating-group entry, in dump order and without the
/// group-name prefix.
pub type GroupRecord = IndexMap<String, String>;

/// One classified dump line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `<Name>Begin` on its own line
    GroupBegin(&'a str),
    /// `Key: Value`; the value keeps embedded colons
    KeyValue { key: &'a str, value: &'a str },
    Blank,
    /// Anything else, e.g. free-form warning text
    Other,
}

fn is_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(name) = trimmed.strip_suffix("Begin") {
        if is_word(name) {
            return Line::GroupBegin(name);
        }
    }
    if let Some((key, rest)) = trimmed.split_once(':') {
        if !key.is_empty() {
            return Line::KeyValue {
                key,
                value: rest.strip_prefix(' ').unwrap_or(rest),
            };
        }
    }
    Line::Other
}

/// Attributes a group entry must carry before it is accepted into the output.
fn required_attrs(group: &str) -> &'static [&'static str] {
    match group {
        "Bookmark" => &["Title", "Level", "PageNumber"],
        "PageMedia" => &["Number", "Rotation", "Rect", "Dimensions"],
        "Info" => &["Key", "Value"],
        _ => &[],
    }
}

fn is_complete(group: &str, record: &GroupRecord) -> bool {
    let required = required_attrs(group);
    if required.is_empty() {
        !record.is_empty()
    } else {
        required.iter().all(|attr| record.contains_key(*attr))
    }
}

/// Parser state: outside any group, or collecting one group instance.
enum State {
    Idle,
    InGroup { name: String, record: GroupRecord },
}

/// Structured form of a `dump_data` metadata dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataTree {
    /// Top-level scalar entries such as `NumberOfPages` or `PdfID0`.
    scalars: IndexMap<String, String>,
    /// Document information directory, collapsed from `InfoKey`/`InfoValue`
    /// pairs.
    info: IndexMap<String, String>,
    /// Repeating groups (`Bookmark`, `PageMedia`, `PageLabel`, ...).
    groups: IndexMap<String, Vec<GroupRecord>>,
}

impl MetadataTree {
    /// Parse complete `dump_data` output.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tree = MetadataTree::default();
        let mut state = State::Idle;
        for line in text.lines() {
            state = tree.step(state, line)?;
        }
        if let State::InGroup { name, record } = state {
            // Trailing group at end of input: keep whatever was collected.
            if !record.is_empty() {
                tree.accept(&name, record);
            }
        }
        Ok(tree)
    }

    /// Parse raw dump bytes in the declared encoding.
    pub fn parse_bytes(bytes: &[u8], encoding: &str) -> Result<Self> {
        let text = encoding::decode(bytes, encoding)?;
        Self::parse(&text)
    }

    fn step(&mut self, state: State, line: &str) -> Result<State> {
        match state {
            State::Idle => match classify(line) {
                Line::GroupBegin(name) => Ok(State::InGroup {
                    name: name.to_string(),
                    record: GroupRecord::new(),
                }),
                Line::KeyValue { key, value } => {
                    self.scalars.insert(key.to_string(), value.to_string());
                    Ok(State::Idle)
                }
                Line::Blank => Ok(State::Idle),
                Line::Other => {
                    log::debug!("ignoring unrecognized dump line: {line:?}");
                    Ok(State::Idle)
                }
            },
            State::InGroup { name, mut record } => match classify(line) {
                Line::KeyValue { key, value }
                    if key.starts_with(name.as_str()) && is_word(&key[name.len()..]) =>
                {
                    record.insert(key[name.len()..].to_string(), value.to_string());
                    Ok(State::InGroup { name, record })
                }
                Line::GroupBegin(next) => {
                    self.close(&name, record);
                    Ok(State::InGroup {
                        name: next.to_string(),
                        record: GroupRecord::new(),
                    })
                }
                Line::KeyValue { key, value } => {
                    // The group ended; the line is an ordinary scalar.
                    self.close(&name, record);
                    self.scalars.insert(key.to_string(), value.to_string());
                    Ok(State::Idle)
                }
                Line::Blank => {
                    self.close(&name, record);
                    Ok(State::Idle)
                }
                Line::Other => Err(Error::MalformedDump(format!(
                    "unexpected line in {name} group: {line:?}"
                ))),
            },
        }
    }

    fn close(&mut self, name: &str, record: GroupRecord) {
        if record.is_empty() {
            return;
        }
        if is_complete(name, &record) {
            self.accept(name, record);
        } else {
            log::warn!(
                "dropping incomplete {name} group with attributes {:?}",
                record.keys().collect::<Vec<_>>()
            );
        }
    }

    fn accept(&mut self, name: &str, record: GroupRecord) {
        if name == "Info" {
            // Pairs of InfoKey/InfoValue collapse into one mapping.
            if let (Some(key), Some(value)) = (record.get("Key"), record.get("Value")) {
                self.info.insert(key.clone(), value.clone());
            }
        } else {
            self.groups.entry(name.to_string()).or_default().push(record);
        }
    }

    /// Look up a top-level scalar entry such as `"PdfID0"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.scalars.get(key).map(String::as_str)
    }

    /// All top-level scalar entries in dump order.
    pub fn scalars(&self) -> &IndexMap<String, String> {
        &self.scalars
    }

    /// The page count from `NumberOfPages`.
    pub fn number_of_pages(&self) -> Option<u32> {
        self.get("NumberOfPages").and_then(|v| v.trim().parse().ok())
    }

    /// The document information directory (Title, Author, Producer, ...).
    pub fn info(&self) -> &IndexMap<String, String> {
        &self.info
    }

    /// All repeating groups keyed by group name.
    pub fn groups(&self) -> &IndexMap<String, Vec<GroupRecord>> {
        &self.groups
    }

    /// The entries of one repeating group, empty if the dump had none.
    pub fn group(&self, name: &str) -> &[GroupRecord] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The `Bookmark` group entries.
    pub fn bookmarks(&self) -> &[GroupRecord] {
        self.group("Bookmark")
    }

    /// The `PageMedia` group entries.
    pub fn page_media(&self) -> &[GroupRecord] {
        self.group("PageMedia")
    }

    /// The `PageLabel` group entries.
    pub fn page_labels(&self) -> &[GroupRecord] {
        self.group("PageLabel")
    }
}
