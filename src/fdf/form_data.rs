//! Caller-facing form-fill input shared by the FDF and XFDF writers.

use indexmap::IndexMap;

use crate::encoding;
use crate::error::Result;

/// One form-field value supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text value
    Text(String),
    /// Checkbox or radio-button state. The FDF writer maps it onto the
    /// field's state options when a parsed dump is available.
    Boolean(bool),
    /// Values of a multi-select field
    List(Vec<String>),
    /// Explicitly empty value
    Null,
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Boolean(value)
    }
}

impl From<Vec<String>> for FieldInput {
    fn from(values: Vec<String>) -> Self {
        FieldInput::List(values)
    }
}

impl From<Vec<&str>> for FieldInput {
    fn from(values: Vec<&str>) -> Self {
        FieldInput::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Option<String>> for FieldInput {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => FieldInput::Text(text),
            None => FieldInput::Null,
        }
    }
}

/// Ordered form-fill data: field name to value.
///
/// Names may use dot notation (`address.street`) to address nested fields;
/// the XFDF writer turns such paths into nested `<field>` elements while the
/// FDF writer keeps them verbatim. Built by the caller and consumed once by
/// a writer.
///
/// ```
/// use pdftk_data::fdf::FormData;
///
/// let data = FormData::new()
///     .with("Firstname", "John")
///     .with("address.street", "Some Street")
///     .with("Pets", vec!["Cat", "Mouse"]);
/// assert_eq!(data.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: IndexMap<String, FieldInput>,
}

impl FormData {
    /// Empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; a repeated name replaces the earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldInput>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldInput>) -> Self {
        self.insert(name, value);
        self
    }

    /// Build form data from raw key/value bytes in the declared encoding.
    ///
    /// This is the entry point for callers whose data arrives in a non-UTF-8
    /// encoding; both names and values are transcoded up front.
    pub fn from_bytes_entries<'a, I>(entries: I, source_encoding: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a [u8], &'a [u8])>,
    {
        let mut data = FormData::new();
        for (name, value) in entries {
            let name = encoding::decode(name, source_encoding)?;
            let value = encoding::decode(value, source_encoding)?;
            data.insert(name, value);
        }
        Ok(data)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldInput)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
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

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldInput>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}
