//! Integration tests for the directory loader and the full
//! load-count-report flow against temporary directories.

use std::fs;

use tempfile::TempDir;
use wordfreq::prelude::*;
use wordfreq::report::FrequencyReport;

#[test]
fn test_loads_all_matching_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file1.txt"), "This is the content of file1.").unwrap();
    fs::write(dir.path().join("file2.txt"), "This is the content of file2.").unwrap();

    let contents = TextDirectoryLoader::new().load(dir.path()).unwrap();

    assert_eq!(contents.len(), 2);
    assert!(
        contents
            .iter()
            .any(|c| c == "This is the content of file1.")
    );
    assert!(
        contents
            .iter()
            .any(|c| c == "This is the content of file2.")
    );
}

#[test]
fn test_ignores_other_extensions() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keep.txt"), "keep").unwrap();
    fs::write(dir.path().join("skip.md"), "skip").unwrap();

    let contents = TextDirectoryLoader::new().load(dir.path()).unwrap();
    assert_eq!(contents, vec!["keep".to_string()]);
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.md"), "some notes").unwrap();

    let loader = TextDirectoryLoader::with_extension("md");
    assert_eq!(loader.extension(), "md");
    assert_eq!(loader.load(dir.path()).unwrap(), vec!["some notes".to_string()]);
}

#[test]
fn test_directory_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nonexistent");

    let result = TextDirectoryLoader::new().load(&missing);
    assert!(matches!(result, Err(WordFreqError::DirectoryNotFound(_))));
}

#[test]
fn test_no_matching_files() {
    let dir = TempDir::new().unwrap();

    let result = TextDirectoryLoader::new().load(dir.path());
    match result {
        Err(WordFreqError::NoMatchingFiles { extension, .. }) => {
            assert_eq!(extension, "txt");
        }
        other => panic!("expected NoMatchingFiles, got {other:?}"),
    }
}

#[test]
fn test_load_count_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "The quick brown fox").unwrap();
    fs::write(dir.path().join("b.txt"), "the lazy dog and the fox").unwrap();

    let documents = TextDirectoryLoader::new().load(dir.path()).unwrap();
    let frequencies = Pipeline::new().run(&documents).unwrap();
    let report = FrequencyReport::from_frequencies(&frequencies, None);

    let mut out = Vec::new();
    report.write_human(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("the: 3\nfox: 2\n"));
    assert!(text.ends_with("Total words: 10\n"));
    assert_eq!(frequencies.len(), 7);
}
