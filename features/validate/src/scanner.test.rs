use super::*;
use crate::error::ValidateError;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_missing_root_is_fatal() {
    let err = scan_documents(&PathBuf::from("/nonexistent/corpus/xyz"))
        .expect_err("missing root must error");
    assert!(matches!(err, ValidateError::RootNotFound { .. }));
    assert!(err.to_string().contains("Skills directory not found"));
}

#[test]
fn test_empty_root_yields_no_documents() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let names = scan_documents(tmp.path()).expect("scan succeeds");
    assert!(names.is_empty());
}

#[test]
fn test_subdirectories_sorted_by_name() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    for name in ["zeta", "alpha", "mid"] {
        fs::create_dir_all(tmp.path().join(name)).expect("mkdir");
    }

    let names = scan_documents(tmp.path()).expect("scan succeeds");
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_plain_files_ignored() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(tmp.path().join("real-skill")).expect("mkdir");
    fs::write(tmp.path().join("README.md"), "not a document").expect("write file");

    let names = scan_documents(tmp.path()).expect("scan succeeds");
    assert_eq!(names, vec!["real-skill"]);
}

#[test]
fn test_nested_directories_not_descended() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(tmp.path().join("outer").join("inner")).expect("mkdir");

    let names = scan_documents(tmp.path()).expect("scan succeeds");
    assert_eq!(names, vec!["outer"]);
}
