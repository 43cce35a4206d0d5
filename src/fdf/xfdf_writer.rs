//! XFDF form-fill file generation.
//!
//! XFDF is the XML member of the FDF family and the friendlier target for
//! Unicode data. Dotted field names build a nested `<field>` hierarchy:
//!
//! ```text
//! <field name="address">
//!   <field name="street">
//!     <value>Some Street</value>
//!   </field>
//! </field>
//! ```
//!
//! Multi-value fields render as several `<value>` elements under one
//! `<field>`. A `Null` input renders the `<field>` element with no `<value>`
//! child at all.

use std::path::Path;

use indexmap::IndexMap;

use crate::encoding::xml_escape;
use crate::error::Result;
use crate::fdf::form_data::{FieldInput, FormData};

const XFDF_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                           <xfdf xmlns=\"http://ns.adobe.com/xfdf/\" xml:space=\"preserve\">\n\
                           <fields>\n";

const XFDF_FOOTER: &str = "</fields>\n</xfdf>\n";

/// One node of the field tree built from dotted-path names.
///
/// A typed tree keeps structural path segments and literal field names
/// apart, so a numeric field name like `c.0` is an ordinary map key and can
/// never be mistaken for a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldNode {
    /// Terminal field; each entry renders as one `<value>` element.
    Leaf(Vec<String>),
    /// Nested fields keyed by name segment.
    Group(IndexMap<String, FieldNode>),
}

impl FieldNode {
    fn leaf(value: &FieldInput) -> Self {
        let values = match value {
            FieldInput::Text(text) => vec![text.clone()],
            FieldInput::Boolean(true) => vec!["Yes".to_string()],
            FieldInput::Boolean(false) => vec!["Off".to_string()],
            FieldInput::List(items) => items.clone(),
            FieldInput::Null => Vec::new(),
        };
        FieldNode::Leaf(values)
    }
}

fn build_tree(data: &FormData) -> IndexMap<String, FieldNode> {
    let mut root = IndexMap::new();
    for (name, value) in data.iter() {
        insert_path(&mut root, name, value);
    }
    root
}

/// Insert a dotted-path entry, creating intermediate groups as needed.
///
/// Conflicts resolve last-writer-wins: a scalar stored where a deeper path
/// needs a group is displaced, and a group is displaced by a later scalar
/// with its exact name.
fn insert_path(map: &mut IndexMap<String, FieldNode>, path: &str, value: &FieldInput) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), FieldNode::leaf(value));
        }
        Some((head, rest)) => {
            if !matches!(map.get(head), Some(FieldNode::Group(_))) {
                map.insert(head.to_string(), FieldNode::Group(IndexMap::new()));
            }
            if let Some(FieldNode::Group(inner)) = map.get_mut(head) {
                insert_path(inner, rest, value);
            }
        }
    }
}

fn write_fields(xml: &mut String, fields: &IndexMap<String, FieldNode>) {
    for (name, node) in fields {
        xml.push_str("<field name=\"");
        xml.push_str(&xml_escape(name));
        xml.push_str("\">\n");
        match node {
            FieldNode::Leaf(values) => {
                for value in values {
                    xml.push_str("<value>");
                    xml.push_str(&xml_escape(value));
                    xml.push_str("</value>\n");
                }
            }
            FieldNode::Group(children) => write_fields(xml, children),
        }
        xml.push_str("</field>\n");
    }
}

/// Writer for the XFDF form-fill dialect.
///
/// ```
/// use pdftk_data::fdf::{FormData, XfdfWriter};
///
/// let data = FormData::new().with("address.city", "Any City");
/// let xml = XfdfWriter::new(data).to_xml();
/// assert!(xml.contains("<field name=\"address\">"));
/// assert!(xml.contains("<value>Any City</value>"));
/// ```
#[derive(Debug, Default)]
pub struct XfdfWriter {
    data: FormData,
}

impl XfdfWriter {
    /// Create a writer for the given form data.
    pub fn new(data: FormData) -> Self {
        Self { data }
    }

    /// Render the XFDF document.
    pub fn to_xml(&self) -> String {
        let tree = build_tree(&self.data);
        let mut xml = String::from(XFDF_HEADER);
        write_fields(&mut xml, &tree);
        xml.push_str(XFDF_FOOTER);
        xml
    }

    /// Render the document as UTF-8 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_xml().into_bytes()
    }

    /// Render and write the file to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_xml())?;
        Ok(())
    }
}
