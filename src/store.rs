//! Agenda storage
//!
//! Each agenda is one flat text file `<dir>/<name>.txt` holding one contact
//! per line (see [`crate::contact`]). Every operation reads the whole file
//! and every mutation rewrites it in full.
//!
//! ```text
//! <dir>/
//!   agenda.toml        # optional configuration
//!   work.txt           # agenda "work"
//!   family.txt         # agenda "family"
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::contact::Contact;
use crate::error::{Error, Result};

/// Extension appended to an agenda name to form its file name
pub const AGENDA_EXTENSION: &str = "txt";

/// Path of the file backing agenda `name` inside `dir`
pub fn agenda_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{AGENDA_EXTENSION}"))
}

/// Check that an agenda name maps to a plain file inside the agenda directory
pub fn validate_agenda_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidArgument(
            "agenda name cannot be empty".to_string(),
        ));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::InvalidArgument(format!(
            "agenda name '{name}' cannot contain path separators"
        )));
    }
    Ok(name)
}

/// Names of the agendas present in `dir`, sorted
pub fn list_agendas(dir: &Path) -> Result<Vec<String>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*.{AGENDA_EXTENSION}");
    let paths = glob::glob(&pattern)
        .map_err(|e| Error::InvalidArgument(format!("invalid agenda directory: {e}")))?;

    let mut names = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| Error::storage(e.path().to_path_buf(), e.into_error()))?;
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Handle on one agenda file
///
/// Passed explicitly to every operation; nothing in the crate keeps a
/// process-wide "current agenda".
#[derive(Debug, Clone)]
pub struct AgendaStore {
    name: String,
    path: PathBuf,
}

impl AgendaStore {
    /// Handle for agenda `name` inside `dir`. The file is not touched.
    pub fn open(dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: agenda_path(dir, name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create a new, empty agenda file.
    ///
    /// Fails with [`Error::AgendaExists`] rather than overwriting.
    pub fn create(&self) -> Result<()> {
        if let Some(parent) = non_empty_parent(&self.path) {
            fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
        }
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                tracing::info!(path = %self.path.display(), "created agenda");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(Error::AgendaExists(self.path.clone()))
            }
            Err(e) => Err(Error::storage(&self.path, e)),
        }
    }

    /// Create the agenda file if it is missing; no-op otherwise
    pub fn ensure_exists(&self) -> Result<()> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| Error::storage(&self.path, e))?;
        Ok(())
    }

    /// Read every contact in file order.
    ///
    /// Blank lines are skipped. A missing file reads as an empty agenda and
    /// is created on the way out.
    pub fn load(&self) -> Result<Vec<Contact>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "agenda missing; creating");
                self.ensure_exists()?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        let contacts: Vec<Contact> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Contact::from_line)
            .collect();

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "loaded agenda");
        Ok(contacts)
    }

    /// Replace the agenda file with `contacts`, one line each.
    ///
    /// The new content goes to a temporary file in the same directory which
    /// is then renamed over the agenda, so the old content is either fully
    /// kept or fully replaced.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        let mut data = String::new();
        for contact in contacts {
            data.push_str(&contact.to_line());
            data.push('\n');
        }

        let dir = non_empty_parent(&self.path).unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::storage(dir, e))?;
        temp.write_all(data.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| Error::storage(temp.path().to_path_buf(), e))?;
        match fs::metadata(&self.path) {
            Ok(meta) => temp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| Error::storage(temp.path().to_path_buf(), e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::storage(&self.path, e)),
        }
        temp.persist(&self.path)
            .map_err(|e| Error::storage(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved agenda");
        Ok(())
    }

    /// Remove the agenda file. A file that is already gone is an error.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|e| Error::storage(&self.path, e))?;
        tracing::info!(path = %self.path.display(), "deleted agenda");
        Ok(())
    }
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
