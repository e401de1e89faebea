//! Interactive agenda session
//!
//! Drives agenda selection and the numbered menu over a [`Prompter`]. Every
//! handler reloads the agenda, works on the in-memory copy and writes the
//! whole collection back on success. Storage failures are reported to the
//! user and abandon the current operation; only prompt I/O failures are
//! returned as errors.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::contact::{normalize_name, Contact};
use crate::dates;
use crate::error::{Error, Result};
use crate::lookup::{
    find_by_exact_name, find_by_substring, find_duplicate, parse_selection, Selection,
};
use crate::prompt::{Prompter, CANCEL_TOKEN};
use crate::store::{validate_agenda_name, AgendaStore};
use crate::validate::{validate_date, validate_email, validate_name, validate_note, validate_phone};

/// Whether the menu loop keeps going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Pick an existing agenda or create a new one.
///
/// `Ok(None)` means the user chose not to open any agenda.
pub fn select_agenda<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dir: &Path,
) -> Result<Option<AgendaStore>> {
    let Some(has_agenda) = prompter.ask_yes_no("Do you already have an agenda? (y/n): ")? else {
        return Ok(None);
    };

    if !has_agenda {
        let Some(create) = prompter.ask_yes_no("Do you want to create a new agenda? (y/n): ")?
        else {
            return Ok(None);
        };
        if !create {
            prompter.say("\nNo agenda was created. Goodbye!")?;
            return Ok(None);
        }
        return create_agenda(prompter, dir);
    }

    loop {
        let Some(name) = ask_agenda_name(prompter, "Agenda name (without extension): ")? else {
            return Ok(None);
        };
        let store = AgendaStore::open(dir, &name);
        if store.exists() {
            prompter.say(format!("Selected agenda: {}", store.path().display()))?;
            return Ok(Some(store));
        }

        prompter.say(format!("\nThe agenda '{}' does not exist.", store.path().display()))?;
        prompter.say("What do you want to do?")?;
        prompter.say("1. Try another name")?;
        prompter.say("2. Create a new agenda")?;
        prompter.say("3. Exit")?;
        match prompter.ask("Choose an option: ")?.as_deref() {
            Some("1") => continue,
            Some("2") => return create_agenda(prompter, dir),
            Some("3") | None => {
                prompter.say("\nLeaving the program. Goodbye!")?;
                return Ok(None);
            }
            Some(_) => prompter.say("Invalid option. Trying again.")?,
        }
    }
}

/// Create a new agenda, offering to reuse one whose name is taken
pub fn create_agenda<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dir: &Path,
) -> Result<Option<AgendaStore>> {
    prompter.say("\nCreating a new agenda.")?;
    prompter.say("Agenda names must be unique.\n")?;

    loop {
        let Some(name) = ask_agenda_name(prompter, "Name for the agenda (without extension): ")?
        else {
            return Ok(None);
        };
        let store = AgendaStore::open(dir, &name);

        match store.create() {
            Ok(()) => {
                prompter.say(format!("Agenda '{}' created.", store.path().display()))?;
                return Ok(Some(store));
            }
            Err(Error::AgendaExists(path)) => {
                prompter.say(format!(
                    "\nAn agenda named '{}' already exists.",
                    path.display()
                ))?;
                prompter.say("What do you want to do?")?;
                prompter.say("1. Try another name")?;
                prompter.say("2. Use the existing agenda")?;
                prompter.say("3. Cancel")?;
                match prompter.ask("Choose an option: ")?.as_deref() {
                    Some("1") => continue,
                    Some("2") => {
                        prompter.say(format!("Using existing agenda: {}", path.display()))?;
                        return Ok(Some(store));
                    }
                    Some("3") | None => {
                        prompter.say("Creation cancelled.")?;
                        return Ok(None);
                    }
                    Some(_) => prompter.say("Invalid option. Trying again.")?,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not create agenda");
                prompter.say(format!("Could not create the agenda: {err}"))?;
            }
        }
    }
}

fn ask_agenda_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<Option<String>> {
    loop {
        let Some(answer) = prompter.ask(prompt)? else {
            return Ok(None);
        };
        match validate_agenda_name(&answer) {
            Ok(name) => return Ok(Some(name.to_string())),
            Err(err) => prompter.say(format!("{err}"))?,
        }
    }
}

/// Menu loop over one open agenda
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: AgendaStore,
    delete_phrase: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, store: AgendaStore, config: &Config) -> Self {
        Self {
            prompter,
            store,
            delete_phrase: config.prompt.delete_phrase.clone(),
        }
    }

    pub fn store(&self) -> &AgendaStore {
        &self.store
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Show the menu until the user exits, input ends or the agenda is deleted
    pub fn run(&mut self) -> Result<()> {
        self.store.ensure_exists().or_else(|err| self.report("open", err))?;
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompter.ask("Choose an option: ")? else {
                return Ok(());
            };
            if self.dispatch(&choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let p = &mut self.prompter;
        p.say("\n===== CONTACT AGENDA =====")?;
        p.say(format!("Current agenda: {}", self.store.path().display()))?;
        p.say("1. Add contact")?;
        p.say("2. List contacts")?;
        p.say("3. Search contacts by name")?;
        p.say("4. Update meeting date (replace)")?;
        p.say("5. Add a new meeting (append)")?;
        p.say("6. Delete contact")?;
        p.say("7. Delete this agenda")?;
        p.say("8. Exit")?;
        Ok(())
    }

    /// Run the handler for one menu choice
    pub fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice.trim() {
            "1" => self.add_contact()?,
            "2" => self.list_contacts()?,
            "3" => self.search_contacts()?,
            "4" => self.update_date()?,
            "5" => self.append_meeting()?,
            "6" => self.delete_contact()?,
            "7" => {
                self.delete_agenda()?;
                self.prompter.pause()?;
                return Ok(Flow::Exit);
            }
            "8" => {
                self.prompter.say("Exiting... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => {
                self.prompter.say("Invalid option.")?;
                return Ok(Flow::Continue);
            }
        }
        self.prompter.pause()?;
        Ok(Flow::Continue)
    }

    /// Add a contact, or a meeting date when the name is already taken
    pub fn add_contact(&mut self) -> Result<()> {
        self.prompter.say("\n--- Add contact ---")?;
        let Some(name) = self
            .prompter
            .ask_field("Full name (0 to cancel): ", validate_name)?
        else {
            return self.cancelled();
        };

        let Some(mut contacts) = self.load_for_update()? else {
            return Ok(());
        };

        if let Some(idx) = find_duplicate(&contacts, &name) {
            self.prompter.say(format!(
                "\nThe contact '{}' already exists.",
                contacts[idx].name
            ))?;
            let add_meeting = self
                .prompter
                .ask_yes_no("Do you want to add a new meeting to this contact? (y/n): ")?;
            if add_meeting != Some(true) {
                return Ok(());
            }
            let Some(date) = self.ask_date()? else {
                return self.cancelled();
            };
            contacts[idx].dates = dates::merge(&contacts[idx].dates, &date);
            return self.persist(&contacts, "append meeting", "Meeting added.");
        }

        let Some(phone) = self
            .prompter
            .ask_field("Phone (8 digits, 0 to cancel): ", validate_phone)?
        else {
            return self.cancelled();
        };
        let Some(email) = self
            .prompter
            .ask_field("Email (0 to cancel): ", validate_email)?
        else {
            return self.cancelled();
        };
        let Some(note) = self
            .prompter
            .ask_field("Note / short description (0 to cancel): ", validate_note)?
        else {
            return self.cancelled();
        };
        let Some(date) = self.ask_date()? else {
            return self.cancelled();
        };

        contacts.push(Contact::new(name, phone, email, note, date));
        self.persist(&contacts, "add contact", "Contact added.")
    }

    pub fn list_contacts(&mut self) -> Result<()> {
        self.prompter.say("\n--- Contact list ---")?;
        let contacts = self.load_or_empty()?;
        if contacts.is_empty() {
            return self.prompter.say("No contacts saved.");
        }
        for (i, contact) in contacts.iter().enumerate() {
            self.print_contact(&format!("Contact #{}", i + 1), contact)?;
        }
        Ok(())
    }

    pub fn search_contacts(&mut self) -> Result<()> {
        self.prompter.say("\n--- Search contacts ---")?;
        let Some(fragment) = self.ask_lookup("Part of the name (Enter to cancel): ")? else {
            return self.prompter.say("Search cancelled.");
        };

        let contacts = self.load_or_empty()?;
        let matches = find_by_substring(&contacts, &fragment);
        if matches.is_empty() {
            return self.prompter.say("No contacts found.");
        }
        for (i, idx) in matches.into_iter().enumerate() {
            self.print_contact(&format!("Result #{}", i + 1), &contacts[idx])?;
        }
        Ok(())
    }

    /// Replace a contact's meeting dates with a single new date
    pub fn update_date(&mut self) -> Result<()> {
        self.prompter.say("\n--- Update meeting date (replace) ---")?;
        let Some((mut contacts, idx)) = self.resolve_target()? else {
            return Ok(());
        };
        let Some(date) = self.ask_date()? else {
            return self.cancelled();
        };
        contacts[idx].dates = date;
        self.persist(&contacts, "update date", "Date updated.")
    }

    /// Merge one more meeting date into a contact's date set
    pub fn append_meeting(&mut self) -> Result<()> {
        self.prompter.say("\n--- Add a new meeting ---")?;
        let Some((mut contacts, idx)) = self.resolve_target()? else {
            return Ok(());
        };
        let Some(date) = self.ask_date()? else {
            return self.cancelled();
        };
        contacts[idx].dates = dates::merge(&contacts[idx].dates, &date);
        self.persist(&contacts, "append meeting", "Meeting added.")
    }

    /// Delete every contact with exactly the given name after a retyped confirmation
    pub fn delete_contact(&mut self) -> Result<()> {
        self.prompter.say("\n--- Delete contact ---")?;
        let Some(name) = self.ask_lookup("Exact full name (Enter to cancel): ")? else {
            return self.cancelled();
        };

        let Some(mut contacts) = self.load_for_update()? else {
            return Ok(());
        };
        let matches = find_by_exact_name(&contacts, &name);
        if matches.is_empty() {
            return self.prompter.say("No contact with that name.");
        }

        self.prompter.say("This will delete:")?;
        for &idx in &matches {
            self.prompter.say(format!("- {}", contacts[idx].name))?;
        }

        let confirm = self
            .prompter
            .ask("Type the exact name to confirm (Enter to cancel): ")?
            .unwrap_or_default();
        if confirm.is_empty() {
            return self.cancelled();
        }
        if normalize_name(&confirm) != normalize_name(&name) {
            return self.prompter.say("Confirmation does not match. Nothing was deleted.");
        }

        for idx in matches.into_iter().rev() {
            contacts.remove(idx);
        }
        self.persist(&contacts, "delete contact", "Contact deleted.")
    }

    /// Remove the whole agenda file. Returns whether it was deleted.
    pub fn delete_agenda(&mut self) -> Result<bool> {
        self.prompter.say(format!(
            "\nYou are about to delete the whole agenda: {}",
            self.store.path().display()
        ))?;
        self.prompter.say("This removes EVERY contact in it.")?;

        let prompt = format!(
            "Type '{}' to confirm (Enter to cancel): ",
            self.delete_phrase
        );
        let answer = self.prompter.ask(&prompt)?.unwrap_or_default();
        if answer != self.delete_phrase {
            self.cancelled()?;
            return Ok(false);
        }

        match self.store.delete() {
            Ok(()) => {
                self.prompter.say("Agenda deleted.")?;
                Ok(true)
            }
            Err(err) => {
                self.report("delete agenda", err)?;
                Ok(false)
            }
        }
    }

    /// Ask for a name fragment, load the agenda and narrow it to one contact
    fn resolve_target(&mut self) -> Result<Option<(Vec<Contact>, usize)>> {
        let Some(fragment) = self.ask_lookup("Name or part of the name (Enter to cancel): ")?
        else {
            self.cancelled()?;
            return Ok(None);
        };

        let Some(contacts) = self.load_for_update()? else {
            return Ok(None);
        };
        let matches = find_by_substring(&contacts, &fragment);

        let idx = match matches.as_slice() {
            [] => {
                self.prompter.say("No contacts found.")?;
                return Ok(None);
            }
            [only] => *only,
            _ => {
                self.prompter.say("Several contacts match:")?;
                for (i, &idx) in matches.iter().enumerate() {
                    self.prompter.say(format!("{}. {}", i + 1, contacts[idx].name))?;
                }
                let answer = self
                    .prompter
                    .ask("Choose one (0 to cancel): ")?
                    .unwrap_or_else(|| CANCEL_TOKEN.to_string());
                match parse_selection(&answer, matches.len()) {
                    Selection::Chosen(pick) => matches[pick],
                    Selection::Cancelled => {
                        self.cancelled()?;
                        return Ok(None);
                    }
                    Selection::Invalid => {
                        self.prompter.say("Invalid selection.")?;
                        return Ok(None);
                    }
                }
            }
        };
        Ok(Some((contacts, idx)))
    }

    fn ask_date(&mut self) -> Result<Option<String>> {
        self.prompter
            .ask_field("Next meeting date (dd/mm/yy, 0 to cancel): ", validate_date)
    }

    /// Free-text lookup input; empty input or the cancel token gives `None`
    fn ask_lookup(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self
            .prompter
            .ask(prompt)?
            .filter(|answer| !answer.is_empty() && answer != CANCEL_TOKEN))
    }

    fn load_for_update(&mut self) -> Result<Option<Vec<Contact>>> {
        match self.store.load() {
            Ok(contacts) => Ok(Some(contacts)),
            Err(err) => {
                self.report("load", err)?;
                Ok(None)
            }
        }
    }

    fn load_or_empty(&mut self) -> Result<Vec<Contact>> {
        Ok(self.load_for_update()?.unwrap_or_default())
    }

    fn persist(&mut self, contacts: &[Contact], action: &str, done: &str) -> Result<()> {
        match self.store.save(contacts) {
            Ok(()) => {
                tracing::info!(agenda = self.store.name(), action, "agenda updated");
                self.prompter.say(done)
            }
            Err(err) => self.report(action, err),
        }
    }

    fn report(&mut self, action: &str, err: Error) -> Result<()> {
        tracing::warn!(agenda = self.store.name(), action, error = %err, "agenda operation failed");
        self.prompter.say(format!("Error: {err}"))
    }

    fn cancelled(&mut self) -> Result<()> {
        self.prompter.say("Operation cancelled.")
    }

    fn print_contact(&mut self, title: &str, contact: &Contact) -> Result<()> {
        let p = &mut self.prompter;
        p.say(format!("\n{title}"))?;
        p.say(format!("Name     : {}", contact.name))?;
        p.say(format!("Phone    : {}", contact.phone))?;
        p.say(format!("Email    : {}", contact.email))?;
        p.say(format!("Note     : {}", contact.note))?;
        p.say(format!("Meetings : {}", contact.dates))?;
        Ok(())
    }
}
