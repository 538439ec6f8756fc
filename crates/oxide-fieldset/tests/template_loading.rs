//! Tests for loading templates from disk.

use std::fs;

use oxide_fieldset::templates::{TemplateConfig, TemplateContext, TemplateRegistry, TemplateResolver};
use oxide_fieldset::FormError;

#[test]
fn load_dir_registers_html_files_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), "A{{ id }}").unwrap();
    fs::write(dir.path().join("b.html"), "B").unwrap();
    fs::write(dir.path().join("readme.md"), "ignored").unwrap();
    fs::create_dir(dir.path().join("nested.html")).unwrap();

    let mut registry = TemplateRegistry::empty().unwrap();
    assert_eq!(registry.load_dir(dir.path()).unwrap(), 2);
    assert_eq!(registry.names(), vec!["a", "b"]);

    let context = TemplateContext {
        id: "1".to_string(),
        ..TemplateContext::default()
    };
    assert_eq!(registry.render("a", &context).unwrap(), "A1");
}

#[test]
fn load_dir_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let mut registry = TemplateRegistry::empty().unwrap();
    let err = registry.load_dir(&missing).unwrap_err();
    assert!(matches!(err, FormError::TemplateIo { ref path, .. } if *path == missing));
}

#[test]
fn load_dir_malformed_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fieldset.html"), "{% if id %}unclosed").unwrap();
    let err = TemplateRegistry::from_config(&TemplateConfig::with_template_dir(dir.path()))
        .unwrap_err();
    assert!(matches!(err, FormError::Template { ref name, .. } if name == "fieldset"));
}

#[test]
fn from_config_without_dir_is_builtin() {
    let registry = TemplateRegistry::from_config(&TemplateConfig::default()).unwrap();
    assert_eq!(registry.names(), vec!["fieldset"]);
}
