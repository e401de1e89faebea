use std::fs;

use agenda::config::{Config, CONFIG_FILE};

#[test]
fn resolve_skips_invalid_local_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE), "default_agenda = 123").expect("write invalid config");

    let cfg = Config::resolve(None, dir.path()).expect("resolve");
    assert!(cfg.default_agenda.is_none());
    assert_eq!(cfg.prompt.delete_phrase, "DELETE");
}

#[test]
fn resolve_skips_bad_default_agenda() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE), "default_agenda = \"../up\"")
        .expect("write config");

    let cfg = Config::resolve(None, dir.path()).expect("resolve");
    assert!(cfg.default_agenda.is_none());
}

#[test]
fn resolve_fails_on_broken_explicit_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[prompt\npause = ").expect("write broken config");

    assert!(Config::resolve(Some(&path), dir.path()).is_err());
}

#[test]
fn dir_setting_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE), "dir = \"agendas\"").expect("write config");

    let cfg = Config::resolve(None, dir.path()).expect("resolve");
    assert_eq!(cfg.dir.as_deref(), Some(std::path::Path::new("agendas")));
}
