//! Form-field dump parsing (`pdftk dump_data_fields`).
//!
//! The dump is a sequence of blocks separated by lines consisting solely of
//! `---`, one block per form field:
//!
//! ```text
//! ---
//! FieldType: Text
//! FieldName: Text1
//! FieldFlags: 0
//! FieldValue: University of Missouri : Ray-Holland
//! FieldJustification: Left
//! ```
//!
//! Values keep any colons they contain, and `FieldValue`/`FieldValueDefault`
//! may span several lines, including lines that look like `---` separators.
//! Two rules resolve the ambiguity: a real block boundary is a `---` line
//! directly followed by a `FieldType:` line, and a multi-line value runs
//! until the next `FieldValue:`, `FieldValueDefault:` or
//! `FieldJustification:` line.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::encoding;
use crate::error::{Error, Result};

/// Attribute keys whose value may span several dump lines.
const MULTILINE_KEYS: [&str; 2] = ["FieldValue", "FieldValueDefault"];

/// Whether `line` terminates a multi-line value.
fn ends_multiline(line: &str) -> bool {
    line.starts_with("FieldValue:")
        || line.starts_with("FieldValueDefault:")
        || line.starts_with("FieldJustification:")
}

/// Split a dump line at the first colon.
///
/// The value keeps any further colons; a single space after the separator is
/// consumed.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    if key.is_empty() {
        return None;
    }
    Some((key, rest.strip_prefix(' ').unwrap_or(rest)))
}

/// A field-attribute value.
///
/// Most attributes occur once per block and stay scalar. A key that repeats
/// within one block (choice values, state options) is promoted to a sequence
/// in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// The key occurred once.
    Scalar(String),
    /// The key occurred repeatedly.
    Sequence(Vec<String>),
}

impl AttrValue {
    /// The value if the key occurred exactly once.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Scalar(value) => Some(value),
            AttrValue::Sequence(_) => None,
        }
    }

    /// All occurrences in dump order; a scalar yields one element.
    pub fn values(&self) -> &[String] {
        match self {
            AttrValue::Scalar(value) => std::slice::from_ref(value),
            AttrValue::Sequence(values) => values,
        }
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Always false; a parsed attribute has at least one occurrence.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Record another occurrence of the same key.
    fn push(&mut self, value: String) {
        match self {
            AttrValue::Scalar(first) => {
                *self = AttrValue::Sequence(vec![std::mem::take(first), value]);
            }
            AttrValue::Sequence(values) => values.push(value),
        }
    }
}

/// Form-field type reported in the `FieldType` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// Single or multi-line text field
    Text,
    /// Checkbox, radio button or push button
    Button,
    /// List box or combo box
    Choice,
    /// Signature field
    Signature,
    /// Field type this crate does not know about
    Unknown(String),
}

impl FieldType {
    fn from_dump(name: &str) -> Self {
        match name {
            "Text" => FieldType::Text,
            "Button" => FieldType::Button,
            "Choice" => FieldType::Choice,
            "Signature" => FieldType::Signature,
            other => FieldType::Unknown(other.to_string()),
        }
    }
}

/// All attributes of one form field, in dump order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldRecord {
    attrs: IndexMap<String, AttrValue>,
}

impl FieldRecord {
    /// Parse the text of a single block, without its leading `---` line.
    pub fn parse(block: &str) -> Result<Self> {
        let lines: Vec<&str> = block.lines().collect();
        Self::parse_lines(&lines)
    }

    fn parse_lines(lines: &[&str]) -> Result<Self> {
        let mut record = FieldRecord::default();
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            let Some((key, value)) = split_key_value(line) else {
                // Blank lines and stray text between attributes.
                continue;
            };
            let mut value = value.to_string();
            if MULTILINE_KEYS.contains(&key) {
                // Everything up to the next FieldValue/FieldValueDefault/
                // FieldJustification line belongs to this value, blank lines
                // and `---` look-alikes included.
                while i < lines.len() && !ends_multiline(lines[i]) {
                    value.push('\n');
                    value.push_str(lines[i]);
                    i += 1;
                }
            }
            record.insert(key, value);
        }
        if record.attrs.is_empty() {
            return Err(Error::MalformedDump(
                "field block without a Key: Value line".to_string(),
            ));
        }
        Ok(record)
    }

    fn insert(&mut self, key: &str, value: String) {
        match self.attrs.get_mut(key) {
            Some(existing) => existing.push(value),
            None => {
                self.attrs.insert(key.to_string(), AttrValue::Scalar(value));
            }
        }
    }

    /// Look up an attribute by its dump key, e.g. `"FieldNameAlt"`.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(AttrValue::as_str)
    }

    /// The field name from `FieldName`.
    pub fn name(&self) -> Option<&str> {
        self.get_str("FieldName")
    }

    /// The field type from `FieldType`.
    pub fn field_type(&self) -> Option<FieldType> {
        self.get_str("FieldType").map(FieldType::from_dump)
    }

    /// The current value(s) from `FieldValue`.
    pub fn value(&self) -> Option<&AttrValue> {
        self.attrs.get("FieldValue")
    }

    /// The default value(s) from `FieldValueDefault`.
    pub fn default_value(&self) -> Option<&AttrValue> {
        self.attrs.get("FieldValueDefault")
    }

    /// Legal state options of a checkbox, radio button or choice field.
    pub fn state_options(&self) -> &[String] {
        self.attrs
            .get("FieldStateOption")
            .map(AttrValue::values)
            .unwrap_or(&[])
    }

    /// The field flag bits from `FieldFlags`.
    pub fn flags(&self) -> Option<u32> {
        self.get_str("FieldFlags").and_then(|v| v.trim().parse().ok())
    }

    /// The maximum text length from `FieldMaxLength`.
    pub fn max_length(&self) -> Option<u32> {
        self.get_str("FieldMaxLength").and_then(|v| v.trim().parse().ok())
    }

    /// The text justification from `FieldJustification`.
    pub fn justification(&self) -> Option<&str> {
        self.get_str("FieldJustification")
    }

    /// Iterate attributes in dump order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct attribute keys.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the record has no attributes. Parsed records never do.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Parsed `dump_data_fields` output: one record per `---`-delimited block,
/// in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldDump {
    records: Vec<FieldRecord>,
    #[serde(skip)]
    source: String,
}

impl FieldDump {
    /// Parse complete `dump_data_fields` output.
    ///
    /// Warning banners printed before the first block are discarded.
    /// Whitespace-only input yields an empty dump.
    pub fn parse(text: &str) -> Result<Self> {
        let records = parse_blocks(text)?;
        Ok(Self {
            records,
            source: text.to_string(),
        })
    }

    /// Parse raw dump bytes in the declared encoding.
    pub fn parse_bytes(bytes: &[u8], encoding: &str) -> Result<Self> {
        let text = encoding::decode(bytes, encoding)?;
        Self::parse(&text)
    }

    /// The parsed records in source order.
    pub fn records(&self) -> &[FieldRecord] {
        &self.records
    }

    /// The record whose `FieldName` matches, if any.
    pub fn record_with_name(&self, name: &str) -> Option<&FieldRecord> {
        self.records.iter().find(|record| record.name() == Some(name))
    }

    /// Iterate the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRecord> {
        self.records.iter()
    }

    /// Number of parsed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dump contained no field blocks.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for FieldDump {
    /// The raw dump text this value was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<'a> IntoIterator for &'a FieldDump {
    type Item = &'a FieldRecord;
    type IntoIter = std::slice::Iter<'a, FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Whether `line` separates two blocks. A `---` inside a multi-line value is
/// not followed by a new field, so the next line disambiguates.
fn is_boundary(line: &str, next: Option<&str>) -> bool {
    line.trim() == "---" && next.is_some_and(|n| n.starts_with("FieldType:"))
}

fn parse_blocks(text: &str) -> Result<Vec<FieldRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    let boundaries: Vec<usize> = (0..lines.len())
        .filter(|&i| is_boundary(lines[i], lines.get(i + 1).copied()))
        .collect();

    if boundaries.is_empty() {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![FieldRecord::parse_lines(&lines)?]);
    }

    if boundaries[0] > 0 {
        log::debug!(
            "discarding {} line(s) before the first field block",
            boundaries[0]
        );
    }

    let mut records = Vec::with_capacity(boundaries.len());
    for (n, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(n + 1).copied().unwrap_or(lines.len());
        records.push(FieldRecord::parse_lines(&lines[start + 1..end])?);
    }
    Ok(records)
}
