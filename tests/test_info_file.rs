//! Integration tests for metadata-update file generation, including the
//! encode-then-parse round trip against the dump parser.

use indexmap::IndexMap;
use pdftk_data::{GroupRecord, InfoData, InfoWriter, MetaEntry, MetadataTree};
use tempfile::tempdir;

fn record(attrs: &[(&str, &str)]) -> GroupRecord {
    attrs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_legacy_flat_input() {
    let data = InfoData::new()
        .with("Creator", "LibreOffice Writer")
        .with("Subject", "öäüÖÄÜ");
    let text = InfoWriter::new(data).to_text();

    assert_eq!(
        text,
        "InfoBegin\nInfoKey: Creator\nInfoValue: LibreOffice Writer\n\
         InfoBegin\nInfoKey: Subject\nInfoValue: öäüÖÄÜ\n"
    );
}

#[test]
fn test_nested_info_input() {
    let mut info = IndexMap::new();
    info.insert("Title".to_string(), "Annual Report".to_string());
    info.insert("Author".to_string(), "Jane".to_string());
    let data = InfoData::new().with("Info", MetaEntry::Info(info));
    let text = InfoWriter::new(data).to_text();

    assert_eq!(
        text,
        "InfoBegin\nInfoKey: Title\nInfoValue: Annual Report\n\
         InfoBegin\nInfoKey: Author\nInfoValue: Jane\n"
    );
}

#[test]
fn test_flat_overrides_earlier_nested() {
    let mut info = IndexMap::new();
    info.insert("Title".to_string(), "nested".to_string());
    let data = InfoData::new()
        .with("Info", MetaEntry::Info(info))
        .with("Title", "flat");
    let text = InfoWriter::new(data).to_text();

    assert_eq!(text, "InfoBegin\nInfoKey: Title\nInfoValue: flat\n");
}

#[test]
fn test_bookmark_and_page_label_groups() {
    let data = InfoData::new()
        .with("Title", "Report")
        .with(
            "Bookmark",
            vec![
                record(&[("Title", "First"), ("Level", "1"), ("PageNumber", "1")]),
                record(&[("Title", "Second"), ("Level", "1"), ("PageNumber", "2")]),
            ],
        )
        .with(
            "PageLabel",
            vec![record(&[
                ("NewIndex", "1"),
                ("Start", "1"),
                ("NumStyle", "NoNumber"),
            ])],
        );
    let text = InfoWriter::new(data).to_text();

    assert_eq!(
        text,
        "InfoBegin\nInfoKey: Title\nInfoValue: Report\n\
         BookmarkBegin\nBookmarkTitle: First\nBookmarkLevel: 1\nBookmarkPageNumber: 1\n\
         BookmarkBegin\nBookmarkTitle: Second\nBookmarkLevel: 1\nBookmarkPageNumber: 2\n\
         PageLabelBegin\nPageLabelNewIndex: 1\nPageLabelStart: 1\nPageLabelNumStyle: NoNumber\n"
    );
}

#[test]
fn test_read_only_scalars_are_dropped() {
    let data = InfoData::new()
        .with("NumberOfPages", "11")
        .with("PdfID0", "1fdce9ed1153ab4c973334b512a67997")
        .with("Creator", "kept");
    let text = InfoWriter::new(data).to_text();

    assert!(!text.contains("NumberOfPages"));
    assert!(!text.contains("PdfID0"));
    assert!(text.contains("InfoValue: kept\n"));
}

#[test]
fn test_encode_then_parse_round_trip() {
    let data = InfoData::new()
        .with("Title", "Annual Report")
        .with("Author", "Jane")
        .with(
            "Bookmark",
            vec![record(&[
                ("Title", "Summary"),
                ("Level", "1"),
                ("PageNumber", "2"),
            ])],
        )
        .with(
            "PageMedia",
            vec![record(&[
                ("Number", "1"),
                ("Rotation", "0"),
                ("Rect", "0 0 595 842"),
                ("Dimensions", "595 842"),
            ])],
        );
    let text = InfoWriter::new(data).to_text();

    let tree = MetadataTree::parse(&text).unwrap();
    assert_eq!(tree.info().get("Title").unwrap(), "Annual Report");
    assert_eq!(tree.info().get("Author").unwrap(), "Jane");
    assert_eq!(tree.bookmarks().len(), 1);
    assert_eq!(tree.bookmarks()[0].get("Title").unwrap(), "Summary");
    assert_eq!(tree.page_media().len(), 1);
    assert_eq!(tree.page_media()[0].get("Rect").unwrap(), "0 0 595 842");
}

#[test]
fn test_parse_edit_encode_round_trip() {
    let dump = "\
InfoBegin
InfoKey: Creator
InfoValue: Writer
PdfID0: 8b93f76a0b28b720d0dee9a6eb2a780a
NumberOfPages: 5
BookmarkBegin
BookmarkTitle: First
BookmarkLevel: 1
BookmarkPageNumber: 1
";
    let tree = MetadataTree::parse(dump).unwrap();
    let data = InfoData::from(tree);
    let text = InfoWriter::new(data).to_text();

    // Writable metadata survives; read-only scalars do not.
    let reparsed = MetadataTree::parse(&text).unwrap();
    assert_eq!(reparsed.info().get("Creator").unwrap(), "Writer");
    assert_eq!(reparsed.bookmarks().len(), 1);
    assert_eq!(reparsed.get("PdfID0"), None);
    assert_eq!(reparsed.number_of_pages(), None);
}

#[test]
fn test_non_utf8_target_encoding() {
    let data = InfoData::new().with("Subject", "öäüÖÄÜ");
    let bytes = InfoWriter::new(data)
        .with_encoding("ISO-8859-1")
        .to_bytes()
        .unwrap();

    // windows-1252 bytes for the umlauts, not UTF-8
    let expected: &[u8] = &[0xF6, 0xE4, 0xFC, 0xD6, 0xC4, 0xDC];
    assert!(bytes
        .windows(expected.len())
        .any(|window| window == expected));
}

#[test]
fn test_unmappable_character_fails() {
    let data = InfoData::new().with("Subject", "мирано");
    let err = InfoWriter::new(data)
        .with_encoding("ISO-8859-1")
        .to_bytes()
        .unwrap_err();
    assert!(matches!(err, pdftk_data::Error::Transcode { .. }));
}

#[test]
fn test_write_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("info.txt");

    let data = InfoData::new().with("Creator", "pdftk_data");
    InfoWriter::new(data).write_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "InfoBegin\nInfoKey: Creator\nInfoValue: pdftk_data\n");
}
