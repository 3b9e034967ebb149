//! Tests for template listing and loading.

use super::*;
use crate::error::LetterError;
use tempfile::TempDir;

fn write(dir: &std::path::Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_list_missing_directory_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let templates = list_templates(temp_dir.path().join("does-not-exist"));
    assert!(templates.is_empty());
}

#[test]
fn test_list_empty_directory_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    assert!(list_templates(temp_dir.path()).is_empty());
}

#[test]
fn test_list_filters_by_suffix_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "formal.txt", "Dear {manager_name}");
    write(temp_dir.path(), "casual.txt", "Hi {manager_name}");
    write(temp_dir.path(), "notes.md", "not a template");
    write(temp_dir.path(), "txt", "no extension");
    std::fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

    let templates = list_templates(temp_dir.path());
    assert_eq!(templates, vec!["casual.txt", "formal.txt"]);
}

#[test]
fn test_list_with_custom_pattern() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "letter.tmpl", "x");
    write(temp_dir.path(), "letter.txt", "y");

    let store = TemplateStore::new(temp_dir.path(), "*.tmpl").unwrap();
    assert_eq!(store.list(), vec!["letter.tmpl"]);
}

#[test]
fn test_invalid_pattern_is_user_error() {
    let err = TemplateStore::new("templates", "[unclosed").unwrap_err();
    assert!(matches!(err, LetterError::UserError(_)));

    let err = TemplateStore::new("templates", "  ").unwrap_err();
    assert!(matches!(err, LetterError::UserError(_)));
}

#[test]
fn test_load_template() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "formal.txt", "Dear {manager_name},\n");

    let template = load_template(temp_dir.path(), "formal.txt").unwrap();
    assert_eq!(template.identifier, "formal.txt");
    assert_eq!(template.raw_text, "Dear {manager_name},\n");
}

#[test]
fn test_load_missing_template_is_source_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_template(temp_dir.path(), "missing.txt").unwrap_err();
    assert!(matches!(err, LetterError::SourceError(_)));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_load_non_utf8_is_source_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("binary.txt"), [0xff, 0xfe, 0x00]).unwrap();

    let err = load_template(temp_dir.path(), "binary.txt").unwrap_err();
    assert!(matches!(err, LetterError::SourceError(_)));
}

#[test]
fn test_load_rejects_path_escapes() {
    let temp_dir = TempDir::new().unwrap();
    let store = TemplateStore::new(temp_dir.path().join("templates"), "*.txt").unwrap();
    write(temp_dir.path(), "secret.txt", "nope");

    for identifier in ["../secret.txt", "..", ".", "", "sub/x.txt", "sub\\x.txt"] {
        let err = store.load(identifier).unwrap_err();
        assert!(
            matches!(err, LetterError::SourceError(_)),
            "expected source error for {:?}",
            identifier
        );
    }
}
