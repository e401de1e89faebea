//! Contact records and their line format
//!
//! An agenda file holds one contact per line:
//!
//! ```text
//! name;phone;email;note;dates
//! Ana Lopez;12345678;ana@mail.com;met at conf;01/01/25, 02/01/25
//! ```
//!
//! Fields are never escaped. Input that would contain the delimiter is
//! rejected by the validators before it reaches a record.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates;

/// Field delimiter inside an agenda line
pub const DELIMITER: &str = ";";

/// Number of fields in a serialized contact
pub const FIELD_COUNT: usize = 5;

/// A single contact in an agenda
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
    /// Serialized meeting-date set (`dd/mm/yy, dd/mm/yy`), kept verbatim
    pub dates: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        note: impl Into<String>,
        dates: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            note: note.into(),
            dates: dates.into(),
        }
    }

    /// Parse one agenda line.
    ///
    /// Missing trailing fields become empty strings; anything past the
    /// fifth field is dropped.
    pub fn from_line(line: &str) -> Self {
        let mut parts = line.split(DELIMITER).map(str::to_string);
        let mut next = || parts.next().unwrap_or_default();
        Self {
            name: next(),
            phone: next(),
            email: next(),
            note: next(),
            dates: next(),
        }
    }

    /// Render the contact as an agenda line (without the newline)
    pub fn to_line(&self) -> String {
        let fields: [&str; FIELD_COUNT] = [
            &self.name,
            &self.phone,
            &self.email,
            &self.note,
            &self.dates,
        ];
        fields.join(DELIMITER)
    }

    /// Key used for the one-contact-per-name rule
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Parsed meeting dates, ascending; unreadable entries are skipped
    pub fn meeting_dates(&self) -> Vec<NaiveDate> {
        dates::parse_date_set(&self.dates)
    }
}

/// Case-insensitive, trimmed, whitespace-collapsed form of a name
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
