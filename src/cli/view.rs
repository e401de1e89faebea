//! agenda list / search command implementation
//!
//! Read-only views of one agenda.

use std::path::PathBuf;

use super::Context;
use crate::contact::Contact;
use crate::dates::format_date;
use crate::error::{Error, Result};
use crate::lookup::find_by_substring;
use crate::output::{emit_success, HumanOutput};

/// One contact as reported by the CLI
#[derive(serde::Serialize)]
pub(super) struct ContactView {
    /// 1-based position in the agenda file
    pub position: usize,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
    pub dates: String,
    /// Parsed meeting dates in canonical form
    pub meetings: Vec<String>,
}

impl ContactView {
    pub(super) fn new(position: usize, contact: &Contact) -> Self {
        Self {
            position,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            note: contact.note.clone(),
            dates: contact.dates.clone(),
            meetings: contact
                .meeting_dates()
                .into_iter()
                .map(format_date)
                .collect(),
        }
    }

    pub(super) fn summary_line(&self) -> String {
        let mut line = format!(
            "#{} {} | {} | {}",
            self.position, self.name, self.phone, self.email
        );
        if !self.note.is_empty() {
            line.push_str(&format!(" | {}", self.note));
        }
        if !self.dates.is_empty() {
            line.push_str(&format!(" | meetings: {}", self.dates));
        }
        line
    }
}

#[derive(serde::Serialize)]
struct ListReport {
    agenda: String,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
    contacts: Vec<ContactView>,
}

pub fn run_list(ctx: &Context) -> Result<()> {
    let store = ctx.existing_store()?;
    let contacts = store.load()?;

    let views: Vec<ContactView> = contacts
        .iter()
        .enumerate()
        .map(|(i, c)| ContactView::new(i + 1, c))
        .collect();

    let mut human = HumanOutput::new(format!(
        "agenda list: {} ({} contacts)",
        store.name(),
        views.len()
    ));
    human.push_summary("path", store.path().display().to_string());
    for view in &views {
        human.push_detail(view.summary_line());
    }
    if views.is_empty() {
        human.push_warning("no contacts saved");
        human.push_next_step(
            "agenda add --name <name> --phone <phone> --email <email> --date <dd/mm/yy>",
        );
    }

    let report = ListReport {
        agenda: store.name().to_string(),
        path: store.path().to_path_buf(),
        fragment: None,
        contacts: views,
    };

    emit_success(ctx.output, "list", &report, Some(&human))
}

pub fn run_search(ctx: &Context, fragment: &str) -> Result<()> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(Error::InvalidArgument(
            "search fragment cannot be empty".to_string(),
        ));
    }

    let store = ctx.existing_store()?;
    let contacts = store.load()?;

    let views: Vec<ContactView> = find_by_substring(&contacts, fragment)
        .into_iter()
        .map(|idx| ContactView::new(idx + 1, &contacts[idx]))
        .collect();

    let mut human = HumanOutput::new(format!(
        "agenda search: {} match(es) for '{}'",
        views.len(),
        fragment
    ));
    human.push_summary("agenda", store.name());
    for view in &views {
        human.push_detail(view.summary_line());
    }
    if views.is_empty() {
        human.push_warning("no contacts found");
    }

    let report = ListReport {
        agenda: store.name().to_string(),
        path: store.path().to_path_buf(),
        fragment: Some(fragment.to_string()),
        contacts: views,
    };

    emit_success(ctx.output, "search", &report, Some(&human))
}
