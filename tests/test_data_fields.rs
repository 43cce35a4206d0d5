//! Integration tests for form-field dump parsing (`dump_data_fields`).

use pdftk_data::{AttrValue, FieldDump, FieldType};

/// Dump with text, multi-line and choice fields, as produced by
/// `pdftk form.pdf dump_data_fields`.
const FIELD_DUMP: &str = "\
---
FieldType: Text
FieldName: field1
FieldNameAlt: field1_alt
FieldFlags: 0
FieldJustification: Left
---
FieldType: Text
FieldName: field2
FieldNameAlt: field2_alt
FieldFlags: 0
FieldValue: value:with:colons
FieldJustification: Left
---
FieldType: Text
FieldName: field3
FieldNameAlt: field3_alt
FieldFlags: 0
FieldValue:
FieldJustification: Left
---
FieldType: Text
FieldName: field4
FieldNameAlt: field4_alt
FieldFlags: 0
FieldValue: field:with:colons

---more:colons:
and
multi lines

FieldJustification: Left
---
FieldType: Text
FieldName: field5
FieldNameAlt: field5_alt
FieldFlags: 0
FieldValue: field:with:colons

---more:colons:
and
multi lines

FieldValueDefault: default:with:colons

---more:colons:
and
multi lines

FieldJustification: Left
---
FieldType: Choice
FieldName: field6
FieldFlags: 2097152
FieldValue: 1
FieldValue: 2
FieldValue: 3
FieldValue: 4
FieldJustification: Left
---
FieldType: Choice
FieldName: field7
FieldFlags: 524288
FieldValue: -- Value with dashes --
FieldValueDefault: -- Value with dashes --
FieldJustification: Left
FieldStateOption: -- Another value with dashes --
FieldStateOption: Value 2
FieldStateOption: Value 3
";

fn scalar(value: &str) -> AttrValue {
    AttrValue::Scalar(value.to_string())
}

fn sequence(values: &[&str]) -> AttrValue {
    AttrValue::Sequence(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn test_block_count_and_order() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    assert_eq!(dump.len(), 7);
    let names: Vec<&str> = dump.iter().filter_map(|r| r.name()).collect();
    assert_eq!(
        names,
        ["field1", "field2", "field3", "field4", "field5", "field6", "field7"]
    );
}

#[test]
fn test_plain_text_field() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    let record = &dump.records()[0];
    assert_eq!(record.field_type(), Some(FieldType::Text));
    assert_eq!(record.get("FieldNameAlt"), Some(&scalar("field1_alt")));
    assert_eq!(record.flags(), Some(0));
    assert_eq!(record.justification(), Some("Left"));
    assert_eq!(record.value(), None);
}

#[test]
fn test_colons_in_value() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    assert_eq!(
        dump.records()[1].value(),
        Some(&scalar("value:with:colons"))
    );
}

#[test]
fn test_empty_value() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    assert_eq!(dump.records()[2].value(), Some(&scalar("")));
}

#[test]
fn test_multiline_value_with_separator_lookalike() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    // The `---more:colons:` line is part of the value, not a block boundary.
    assert_eq!(
        dump.records()[3].value(),
        Some(&scalar("field:with:colons\n\n---more:colons:\nand\nmulti lines\n"))
    );
}

#[test]
fn test_multiline_default_value() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    let record = &dump.records()[4];
    assert_eq!(
        record.value(),
        Some(&scalar("field:with:colons\n\n---more:colons:\nand\nmulti lines\n"))
    );
    assert_eq!(
        record.default_value(),
        Some(&scalar("default:with:colons\n\n---more:colons:\nand\nmulti lines\n"))
    );
    assert_eq!(record.justification(), Some("Left"));
}

#[test]
fn test_repeated_value_becomes_sequence() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    let record = &dump.records()[5];
    assert_eq!(record.field_type(), Some(FieldType::Choice));
    assert_eq!(record.value(), Some(&sequence(&["1", "2", "3", "4"])));
}

#[test]
fn test_state_options_sequence() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    let record = dump.record_with_name("field7").unwrap();
    assert_eq!(
        record.state_options(),
        ["-- Another value with dashes --", "Value 2", "Value 3"]
    );
    // A value of dashes is not mistaken for a separator either.
    assert_eq!(record.value(), Some(&scalar("-- Value with dashes --")));
}

#[test]
fn test_warning_banner_is_discarded() {
    let input = format!(
        "WARNING: The creator of the input PDF:\n   form.pdf\n\
         has set an owner password.\n{FIELD_DUMP}"
    );
    let dump = FieldDump::parse(&input).unwrap();
    assert_eq!(dump.len(), 7);
    assert_eq!(dump.records()[0].name(), Some("field1"));
}

#[test]
fn test_input_without_leading_separator_is_one_block() {
    let dump = FieldDump::parse("FieldType: Text\nFieldName: only\n").unwrap();
    assert_eq!(dump.len(), 1);
    assert_eq!(dump.records()[0].name(), Some("only"));
}

#[test]
fn test_empty_input_yields_empty_dump() {
    assert!(FieldDump::parse("").unwrap().is_empty());
    assert!(FieldDump::parse("\n  \n").unwrap().is_empty());
}

#[test]
fn test_garbage_input_fails() {
    let err = FieldDump::parse("this is not a dump").unwrap_err();
    assert!(matches!(err, pdftk_data::Error::MalformedDump(_)));
}

#[test]
fn test_display_returns_source_text() {
    let dump = FieldDump::parse(FIELD_DUMP).unwrap();
    assert_eq!(dump.to_string(), FIELD_DUMP);
}

#[test]
fn test_parse_bytes_with_declared_encoding() {
    // "FieldValue: öäü" in ISO-8859-1
    let mut bytes = b"---\nFieldType: Text\nFieldName: umlauts\nFieldValue: ".to_vec();
    bytes.extend_from_slice(&[0xF6, 0xE4, 0xFC, b'\n']);
    let dump = FieldDump::parse_bytes(&bytes, "ISO-8859-1").unwrap();
    assert_eq!(dump.records()[0].value(), Some(&scalar("öäü")));
}

#[test]
fn test_parse_bytes_with_unknown_encoding_fails() {
    let err = FieldDump::parse_bytes(b"---\nFieldType: Text\n", "EBCDIC-37").unwrap_err();
    assert!(matches!(err, pdftk_data::Error::UnsupportedEncoding(_)));
}

#[test]
fn test_serialized_shape() {
    let dump = FieldDump::parse(
        "---\nFieldType: Choice\nFieldName: pick\nFieldValue: 1\nFieldValue: 2\n",
    )
    .unwrap();
    let json = serde_json::to_value(&dump).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "FieldType": "Choice",
            "FieldName": "pick",
            "FieldValue": ["1", "2"],
        }])
    );
}
