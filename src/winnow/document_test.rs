use super::*;

const DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

#[test]
fn header_only_document() {
    let doc = DocumentWriter::new(DIGEST, 123, DEFAULT_NAME).unwrap();
    assert_eq!(doc.finish(), format!("file={DIGEST},123,pasted.wfp\n"));
}

#[test]
fn header_uses_given_name() {
    let doc = DocumentWriter::new(DIGEST, 9, "src/lib.rs").unwrap();
    assert_eq!(doc.finish(), format!("file={DIGEST},9,src/lib.rs\n"));
}

#[test]
fn null_digest_is_accepted() {
    let doc = DocumentWriter::new(NULL_DIGEST, 0, DEFAULT_NAME).unwrap();
    assert!(doc.finish().starts_with("file=00000000000000000000000000000000,0,"));
}

#[test]
fn rejects_short_digest() {
    assert!(DocumentWriter::new("abc123", 10, DEFAULT_NAME).is_err());
}

#[test]
fn rejects_non_hex_digest() {
    // 32 chars, but 'g' and 'z' are not hex digits.
    assert!(DocumentWriter::new("gggggggggggggggggggggggggggggggz", 10, DEFAULT_NAME).is_err());
}

#[test]
fn rejects_overlong_digest() {
    let digest = "0".repeat(33);
    assert!(DocumentWriter::new(&digest, 10, DEFAULT_NAME).is_err());
}

#[test]
fn same_line_hashes_join_with_commas() {
    let mut doc = DocumentWriter::new(DIGEST, 100, DEFAULT_NAME).unwrap();
    doc.emit(3, 0x1);
    doc.emit(3, 0xdead_beef);
    doc.emit(3, 0xffff_ffff);
    let text = doc.finish();
    let records: Vec<&str> = text.lines().collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], "3=00000001,deadbeef,ffffffff");
}

#[test]
fn new_line_opens_new_record() {
    let mut doc = DocumentWriter::new(DIGEST, 100, DEFAULT_NAME).unwrap();
    doc.emit(1, 0x10);
    doc.emit(1, 0x20);
    doc.emit(7, 0x30);
    let text = doc.finish();
    assert_eq!(
        text,
        format!("file={DIGEST},100,pasted.wfp\n1=00000010,00000020\n7=00000030")
    );
}

#[test]
fn no_trailing_newline_after_last_record() {
    let mut doc = DocumentWriter::new(DIGEST, 100, DEFAULT_NAME).unwrap();
    doc.emit(2, 0x40);
    assert!(!doc.finish().ends_with('\n'));
}

#[test]
fn hex_hash_is_fixed_width_lowercase() {
    assert_eq!(hex_hash(0), "00000000");
    assert_eq!(hex_hash(0xABC), "00000abc");
    assert_eq!(hex_hash(u32::MAX), "ffffffff");
}

#[test]
fn hex_hash_round_trips() {
    for value in [0u32, 1, 0xABC, 0x1234_5678, 0xdead_beef, u32::MAX] {
        let rendered = hex_hash(value);
        assert_eq!(rendered.len(), 8);
        assert_eq!(u32::from_str_radix(&rendered, 16).unwrap(), value);
    }
}
