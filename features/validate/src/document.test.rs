use super::*;
use std::fs;

#[test]
fn test_load_existing_document() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let skill = tmp.path().join("http-polling");
    fs::create_dir_all(&skill).expect("mkdir skill");
    fs::write(skill.join(SKILL_MD), "# n8n HTTP Polling\n").expect("write SKILL.md");

    let doc = load_document(tmp.path(), "http-polling").expect("document loads");
    assert_eq!(doc.name, "http-polling");
    assert_eq!(doc.content, "# n8n HTTP Polling\n");
}

#[test]
fn test_load_missing_directory() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    assert!(load_document(tmp.path(), "ghost").is_none());
}

#[test]
fn test_load_directory_without_skill_md() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let skill = tmp.path().join("empty-skill");
    fs::create_dir_all(&skill).expect("mkdir skill");
    fs::write(skill.join("README.md"), "not the document").expect("write README");

    assert!(load_document(tmp.path(), "empty-skill").is_none());
}
