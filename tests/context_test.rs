// tests/context_test.rs
use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use vc::config::{load_context, ReleaseContext, DEFAULT_CONTEXT_PATH};
use vc::context::{ContextStore, FileStore};
use vc::git::MockGit;
use vc::release::{ExplicitRequest, Strategy, TagEngine};

#[test]
fn test_load_missing_context() {
    let dir = TempDir::new().unwrap();
    assert_eq!(load_context(&dir.path().join("absent.toml")).unwrap(), None);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".vc.toml");
    fs::write(
        &path,
        r#"
dry_mode = false
remote = "upstream"

[current.tag]
revision = 4

[current.tag.version]
major = 1
minor = 2
patch = 3

[current.tag.release]
name = "beta"
"#,
    )
    .unwrap();

    let context = load_context(&path).unwrap().unwrap();
    assert!(!context.dry_mode);
    assert_eq!(context.remote, "upstream");
    assert_eq!(context.current_version().to_string(), "v1.2.3-beta.4");
}

#[test]
fn test_written_document_uses_dotted_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".vc.toml");

    FileStore::open(&path).unwrap();

    let document: toml::Table = fs::read_to_string(&path).unwrap().parse().unwrap();
    assert_eq!(document["dry_mode"].as_bool(), Some(true));
    assert_eq!(document["remote"].as_str(), Some("origin"));
    assert_eq!(document["current"]["tag"]["revision"].as_integer(), Some(1));
    assert_eq!(
        document["current"]["tag"]["version"]["major"].as_integer(),
        Some(0)
    );
    assert_eq!(
        document["current"]["tag"]["release"]["name"].as_str(),
        Some("alpha")
    );
}

#[test]
fn test_dry_run_apply_updates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".vc.toml");

    let store = FileStore::open(&path).unwrap();
    let mut engine = TagEngine::new(store, MockGit::new());
    engine
        .run(
            Strategy::Explicit(ExplicitRequest {
                semver: Some("v2.3.4-rc.5".to_string()),
                ..ExplicitRequest::default()
            }),
            None,
        )
        .unwrap();

    assert!(engine.git().calls().is_empty());
    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get().current_version().to_string(),
        "v2.3.4-rc.5"
    );
    assert!(reopened.get().dry_mode);
}

#[test]
fn test_unknown_keys_preserved_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".vc.toml");
    fs::write(&path, "draft = true\n\n[current.tag]\nnote = \"keep\"\n").unwrap();

    let mut store = FileStore::open(&path).unwrap();
    store.set().remote = "fork".to_string();
    store.flush().unwrap();

    let document: toml::Table = fs::read_to_string(&path).unwrap().parse().unwrap();
    assert_eq!(document["draft"].as_bool(), Some(true));
    assert_eq!(document["remote"].as_str(), Some("fork"));
    assert_eq!(document["current"]["tag"]["note"].as_str(), Some("keep"));
}

#[test]
#[serial]
fn test_default_path_is_working_directory() {
    let dir = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = FileStore::open(DEFAULT_CONTEXT_PATH);

    std::env::set_current_dir(previous).unwrap();
    let store = result.unwrap();
    assert_eq!(store.path(), std::path::Path::new(".vc.toml"));
    assert_eq!(store.get(), &ReleaseContext::default());
    assert!(dir.path().join(".vc.toml").exists());
}
