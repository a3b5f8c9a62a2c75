use super::{source_for, DocumentSource, FileSource, SourceError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_file_source_reads_whole_document() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Hello\n\nworld").unwrap();

    let source = FileSource::new(file.path());
    assert_eq!(source.fetch().unwrap(), "# Hello\n\nworld");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.md");

    let err = FileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, SourceError::Read { .. }));
    assert!(err.to_string().contains("absent.md"), "{err}");
}

#[test]
fn test_invalid_utf8_is_an_encoding_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = FileSource::new(file.path()).fetch().unwrap_err();
    assert!(matches!(err, SourceError::Encoding { .. }));
}

#[test]
fn test_source_names() {
    assert_eq!(FileSource::new("docs/guide.md").name(), "guide.md");
    assert_eq!(source_for(Path::new("-")).name(), "stdin");
    assert_eq!(source_for(Path::new("notes.md")).name(), "notes.md");
}
