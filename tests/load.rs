use std::fs;
use table_conf::{ConfError, Document};

const DEFAULT: &str = "[client]\nretries = 3\nverbose = false\n";

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");
    let err = Document::load(&path).unwrap_err();
    match err {
        ConfError::MissingFile { path: reported, .. } => assert_eq!(reported, path),
        err => panic!("unexpected error {err:?}"),
    }
}

#[test]
fn load_or_init_writes_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("client.conf");

    let document = Document::load_or_init(&path, DEFAULT).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT);
    assert_eq!(document.tables(), ["client"]);
    assert_eq!(
        document.get("client", "retries").unwrap().to::<u32>(),
        Ok(3)
    );
}

#[test]
fn load_or_init_keeps_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("client.conf");
    fs::write(&path, "[client]\nretries = 5\n").unwrap();

    let document = Document::load_or_init(&path, DEFAULT).unwrap();
    assert_eq!(
        document.get("client", "retries").map(|v| v.as_str()),
        Some("5")
    );
    assert_eq!(document.get("client", "verbose"), None);
}

#[test]
fn load_or_init_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("client.conf");
    let err = Document::load_or_init(&path, DEFAULT).unwrap_err();
    assert!(matches!(err, ConfError::WriteDefault { .. }));
}
