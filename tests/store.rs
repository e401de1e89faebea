mod support;

use std::fs;

use agenda::contact::Contact;
use agenda::error::Error;
use agenda::store::{list_agendas, AgendaStore};
use support::{ana, juan, TestAgendaDir};

#[test]
fn load_missing_agenda_is_empty_and_creates_file() {
    let dir = TestAgendaDir::new();
    let store = dir.store("work");
    assert!(!store.exists());

    let contacts = store.load().expect("load");
    assert!(contacts.is_empty());
    assert!(store.exists());

    // Second load goes through the regular path.
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn load_skips_blank_lines_and_pads_short_rows() {
    let dir = TestAgendaDir::new();
    dir.write_agenda(
        "work",
        "\nAna Lopez;12345678;ana@mail.com;friend;01/01/25\n   \nJuan Lopez;87654321\n\n",
    );

    let contacts = dir.store("work").load().expect("load");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0], ana());
    assert_eq!(
        contacts[1],
        Contact::new("Juan Lopez", "87654321", "", "", "")
    );
}

#[test]
fn load_accepts_crlf_line_endings() {
    let dir = TestAgendaDir::new();
    dir.write_agenda("work", "Ana Lopez;12345678;ana@mail.com;friend;01/01/25\r\n");

    let contacts = dir.store("work").load().expect("load");
    assert_eq!(contacts, vec![ana()]);
}

#[test]
fn save_then_load_round_trips_file_content() {
    let dir = TestAgendaDir::new();
    let original = "Ana Lopez;12345678;ana@mail.com;friend;01/01/25, 02/01/25\n\
                    Juan Lopez;87654321;juan@mail.com;;legacy garbage\n\
                    Eva Ruiz;11112222;eva@mail.com;;\n";
    dir.write_agenda("work", original);

    let store = dir.store("work");
    let contacts = store.load().expect("load");
    store.save(&contacts).expect("save");

    assert_eq!(dir.read_agenda("work"), original);
}

#[test]
fn save_replaces_previous_content() {
    let dir = TestAgendaDir::new();
    let store = dir.seed("work", &[ana(), juan()]);

    store.save(&[juan()]).expect("save");

    assert_eq!(
        dir.read_agenda("work"),
        "Juan Lopez;87654321;juan@mail.com;;03/03/25\n"
    );
}

#[test]
fn save_empty_collection_truncates() {
    let dir = TestAgendaDir::new();
    let store = dir.seed("work", &[ana()]);
    store.save(&[]).expect("save");
    assert_eq!(dir.read_agenda("work"), "");
}

#[test]
fn load_failure_is_a_storage_error() {
    let dir = TestAgendaDir::new();
    fs::create_dir(dir.agenda_file("broken")).expect("create dir in place of agenda");

    let err = dir.store("broken").load().expect_err("directory is not an agenda");
    assert!(matches!(err, Error::Storage { .. }));
}

#[test]
fn create_refuses_to_overwrite() {
    let dir = TestAgendaDir::new();
    let store = dir.seed("work", &[ana()]);

    let err = store.create().expect_err("agenda exists");
    assert!(matches!(err, Error::AgendaExists(_)));
    assert_eq!(store.load().expect("load"), vec![ana()]);
}

#[test]
fn create_new_agenda_is_empty() {
    let dir = TestAgendaDir::new();
    let store = dir.store("home");
    store.create().expect("create");
    assert_eq!(dir.read_agenda("home"), "");
}

#[test]
fn ensure_exists_keeps_content() {
    let dir = TestAgendaDir::new();
    let store = dir.seed("work", &[ana()]);
    store.ensure_exists().expect("ensure");
    assert_eq!(store.load().expect("load"), vec![ana()]);
}

#[test]
fn delete_is_not_idempotent() {
    let dir = TestAgendaDir::new();
    let store = dir.seed("work", &[ana()]);

    store.delete().expect("delete");
    assert!(!store.exists());

    let err = store.delete().expect_err("already deleted");
    assert!(matches!(err, Error::Storage { .. }));
}

#[test]
fn stores_for_different_agendas_are_independent() {
    let dir = TestAgendaDir::new();
    let work = dir.seed("work", &[ana()]);
    let home = dir.seed("home", &[juan()]);

    assert_eq!(work.load().expect("load"), vec![ana()]);
    assert_eq!(home.load().expect("load"), vec![juan()]);
}

#[test]
fn list_agendas_returns_sorted_names() {
    let dir = TestAgendaDir::new();
    dir.write_agenda("work", "");
    dir.write_agenda("family", "");
    fs::write(dir.path().join("agenda.toml"), "").expect("write config");
    fs::create_dir(dir.agenda_file("not-a-file")).expect("create dir");

    let names = list_agendas(dir.path()).expect("list");
    assert_eq!(names, vec!["family".to_string(), "work".to_string()]);
}

#[test]
fn open_does_not_touch_disk() {
    let dir = TestAgendaDir::new();
    let store = AgendaStore::open(dir.path(), "work");
    assert_eq!(store.name(), "work");
    assert_eq!(store.path(), dir.agenda_file("work"));
    assert!(!store.exists());
}
