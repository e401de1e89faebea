//! Contact lookup by name
//!
//! All lookups return indices into the loaded collection in collection
//! order, so callers can mutate the matched records in place before saving.

use crate::contact::{normalize_name, Contact};

/// Indices of contacts whose name contains `fragment`, ignoring case
pub fn find_by_substring(contacts: &[Contact], fragment: &str) -> Vec<usize> {
    let needle = fragment.trim().to_lowercase();
    contacts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of contacts whose normalized name equals `name`'s.
///
/// Normally at most one, but agendas written by hand may hold duplicates.
pub fn find_by_exact_name(contacts: &[Contact], name: &str) -> Vec<usize> {
    let key = normalize_name(name);
    contacts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.normalized_name() == key)
        .map(|(i, _)| i)
        .collect()
}

/// First contact that already uses `name`
pub fn find_duplicate(contacts: &[Contact], name: &str) -> Option<usize> {
    find_by_exact_name(contacts, name).into_iter().next()
}

/// Outcome of asking the user to pick one of several candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Position in the candidate list (0-based)
    Chosen(usize),
    /// The user entered the cancel sentinel
    Cancelled,
    /// Non-numeric or out-of-range input; the operation is abandoned
    Invalid,
}

/// Interpret a 1-based pick among `count` candidates.
///
/// Bad input does not re-prompt: it cancels the whole operation.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    match input.trim().parse::<usize>() {
        Ok(0) => Selection::Cancelled,
        Ok(n) if n <= count => Selection::Chosen(n - 1),
        _ => Selection::Invalid,
    }
}
