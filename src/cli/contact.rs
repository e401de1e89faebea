//! agenda add / meet command implementation
//!
//! Scripted counterparts of the "add contact" and meeting-date menu
//! entries. Both reload the agenda and rewrite it in full.

use super::view::ContactView;
use super::Context;
use crate::contact::Contact;
use crate::dates;
use crate::error::{Error, Result};
use crate::lookup::{find_by_exact_name, find_by_substring, find_duplicate};
use crate::output::{emit_success, HumanOutput};
use crate::validate::{validate_date, validate_email, validate_name, validate_note, validate_phone};

/// Options for `agenda add`
pub struct AddOptions {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
    pub date: String,
}

/// Options for `agenda meet`
pub struct MeetOptions {
    pub fragment: String,
    pub date: String,
    pub replace: bool,
}

#[derive(serde::Serialize)]
struct ContactReport {
    agenda: String,
    action: &'static str,
    contact: ContactView,
}

pub fn run_add(ctx: &Context, options: AddOptions) -> Result<()> {
    let name = validate_name(&options.name).map_err(|e| Error::invalid_field("name", e))?;
    let phone = validate_phone(&options.phone).map_err(|e| Error::invalid_field("phone", e))?;
    let email = validate_email(&options.email).map_err(|e| Error::invalid_field("email", e))?;
    let note = validate_note(&options.note).map_err(|e| Error::invalid_field("note", e))?;
    let date = validate_date(&options.date).map_err(|e| Error::invalid_field("date", e))?;

    let store = ctx.existing_store()?;
    let mut contacts = store.load()?;
    if let Some(idx) = find_duplicate(&contacts, &name) {
        return Err(Error::ContactExists(contacts[idx].name.clone()));
    }

    contacts.push(Contact::new(name, phone, email, note, date));
    store.save(&contacts)?;

    let position = contacts.len();
    let view = ContactView::new(position, &contacts[position - 1]);
    tracing::info!(agenda = store.name(), contact = %view.name, "contact added");

    let mut human = HumanOutput::new(format!("agenda add: {}", view.name));
    human.push_summary("agenda", store.name());
    human.push_summary("meetings", view.dates.clone());
    human.push_next_step("agenda list");

    let report = ContactReport {
        agenda: store.name().to_string(),
        action: "added",
        contact: view,
    };
    emit_success(ctx.output, "add", &report, Some(&human))
}

pub fn run_meet(ctx: &Context, options: MeetOptions) -> Result<()> {
    let date = validate_date(&options.date).map_err(|e| Error::invalid_field("date", e))?;
    let fragment = options.fragment.trim();
    if fragment.is_empty() {
        return Err(Error::InvalidArgument(
            "contact name fragment cannot be empty".to_string(),
        ));
    }

    let store = ctx.existing_store()?;
    let mut contacts = store.load()?;
    let idx = resolve_unique(&contacts, fragment)?;

    let action = if options.replace {
        contacts[idx].dates = date;
        "replaced"
    } else {
        contacts[idx].dates = dates::merge(&contacts[idx].dates, &date);
        "appended"
    };
    store.save(&contacts)?;

    let view = ContactView::new(idx + 1, &contacts[idx]);
    tracing::info!(agenda = store.name(), contact = %view.name, action, "meeting date updated");

    let mut human = HumanOutput::new(format!("agenda meet: {} ({action})", view.name));
    human.push_summary("agenda", store.name());
    human.push_summary("meetings", view.dates.clone());

    let report = ContactReport {
        agenda: store.name().to_string(),
        action,
        contact: view,
    };
    emit_success(ctx.output, "meet", &report, Some(&human))
}

/// Narrow a fragment to one contact.
///
/// Several substring matches are accepted only when exactly one of them is
/// an exact name match; there is no prompt to disambiguate here.
fn resolve_unique(contacts: &[Contact], fragment: &str) -> Result<usize> {
    let matches = find_by_substring(contacts, fragment);
    match matches.as_slice() {
        [] => Err(Error::ContactNotFound(fragment.to_string())),
        [only] => Ok(*only),
        _ => match find_by_exact_name(contacts, fragment).as_slice() {
            [exact] => Ok(*exact),
            _ => Err(Error::AmbiguousContact {
                fragment: fragment.to_string(),
                candidates: matches.iter().map(|&i| contacts[i].name.clone()).collect(),
            }),
        },
    }
}
