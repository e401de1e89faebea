#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use agenda::config::Config;
use agenda::contact::Contact;
use agenda::prompt::Prompter;
use agenda::session::Session;
use agenda::store::{agenda_path, AgendaStore};
use tempfile::TempDir;

pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// Throwaway directory holding agenda files
pub struct TestAgendaDir {
    dir: TempDir,
}

impl TestAgendaDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn agenda_file(&self, name: &str) -> PathBuf {
        agenda_path(self.dir.path(), name)
    }

    pub fn write_agenda(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.agenda_file(name);
        fs::write(&path, contents).expect("write agenda");
        path
    }

    pub fn read_agenda(&self, name: &str) -> String {
        fs::read_to_string(self.agenda_file(name)).expect("read agenda")
    }

    pub fn store(&self, name: &str) -> AgendaStore {
        AgendaStore::open(self.dir.path(), name)
    }

    pub fn seed(&self, name: &str, contacts: &[Contact]) -> AgendaStore {
        let store = self.store(name);
        store.save(contacts).expect("seed agenda");
        store
    }
}

pub fn scripted(script: &str) -> ScriptedPrompter {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()).with_pause(false)
}

/// Run the menu loop on agenda `name` with scripted input; returns the transcript
pub fn run_session(dir: &TestAgendaDir, name: &str, script: &str) -> String {
    let mut session = Session::new(scripted(script), dir.store(name), &Config::default());
    session.run().expect("session run");
    String::from_utf8(session.into_prompter().into_output()).expect("utf8 transcript")
}

pub fn ana() -> Contact {
    Contact::new("Ana Lopez", "12345678", "ana@mail.com", "friend", "01/01/25")
}

pub fn juan() -> Contact {
    Contact::new("Juan Lopez", "87654321", "juan@mail.com", "", "03/03/25")
}
