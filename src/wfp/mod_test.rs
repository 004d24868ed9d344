use std::fs;

use tempfile::tempdir;

use super::*;

fn table() -> Crc32Table {
    Crc32Table::new()
}

#[test]
fn collect_single_file_has_digest_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snippet.c");
    let src = b"int main(void) { return 0; }\n";
    fs::write(&path, src).unwrap();

    let docs = collect(&table(), &path, &ExcludeFilter::default(), 0).unwrap();
    assert_eq!(docs.len(), 1);
    let expected_header = format!("file={},{},{}\n", md5_hex(src), src.len(), path.display());
    assert!(docs[0].starts_with(&expected_header), "doc: {}", docs[0]);
}

#[test]
fn collect_single_binary_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, b"ELF\x00\x01\x02").unwrap();

    assert!(collect(&table(), &path, &ExcludeFilter::default(), 0).is_err());
}

#[test]
fn collect_single_short_file_below_min_len_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.c");
    fs::write(&path, "x=1").unwrap();

    assert!(collect(&table(), &path, &ExcludeFilter::default(), 50).is_err());
}

#[test]
fn collect_directory_skips_binary_and_short_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("code.c"), "a".repeat(200)).unwrap();
    fs::write(dir.path().join("blob.bin"), b"\x00\x01\x02").unwrap();
    fs::write(dir.path().join("tiny.c"), "x").unwrap();

    let docs = collect(&table(), dir.path(), &ExcludeFilter::default(), 50).unwrap();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].starts_with("file="));
    assert!(docs[0].contains(",code.c\n"));
}

#[test]
fn collect_directory_uses_relative_names() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("src");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("lib.rs"), "pub fn f() {}\n").unwrap();

    let docs = collect(&table(), dir.path(), &ExcludeFilter::default(), 0).unwrap();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].contains(",src/lib.rs\n"), "doc: {}", docs[0]);
}

#[test]
fn collect_directory_respects_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("bundle.min.js"), "var x=1;\n").unwrap();

    let filter = ExcludeFilter::new(&[], &[], &["*.min.js".to_string()]);
    let docs = collect(&table(), dir.path(), &filter, 0).unwrap();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].contains(",main.rs\n"));
}

#[test]
fn collect_empty_directory_yields_no_documents() {
    let dir = tempdir().unwrap();
    let docs = collect(&table(), dir.path(), &ExcludeFilter::default(), 0).unwrap();
    assert!(docs.is_empty());
}

#[test]
fn join_documents_inserts_newline_between_documents() {
    // A document with records has no trailing newline; a header-only one does.
    let with_records = "file=a,10,one\n5=00000001".to_string();
    let header_only = "file=b,0,two\n".to_string();
    let joined = join_documents(&[with_records, header_only]);
    assert_eq!(joined, "file=a,10,one\n5=00000001\nfile=b,0,two\n");
}

#[test]
fn join_documents_single_document_unchanged() {
    let doc = "file=a,10,one\n5=00000001".to_string();
    assert_eq!(join_documents(std::slice::from_ref(&doc)), doc);
}

#[test]
fn join_documents_empty_slice() {
    assert_eq!(join_documents(&[]), "");
}

#[test]
fn run_on_directory_prints_documents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.c"), "int a;\n").unwrap();
    run(Some(dir.path()), None, &ExcludeFilter::default()).unwrap();
}

#[test]
fn run_on_empty_directory() {
    let dir = tempdir().unwrap();
    run(Some(dir.path()), None, &ExcludeFilter::default()).unwrap();
}

#[test]
fn run_writes_output_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.c");
    fs::write(&src, "int aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa;\n").unwrap();
    let out = dir.path().join("out.wfp");

    run(Some(&src), Some(&out), &ExcludeFilter::default()).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("file="));
}
