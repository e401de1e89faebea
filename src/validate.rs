//! Field validation
//!
//! Each validator trims its input and returns the normalized value or the
//! first rule the input breaks. Validators never loop; re-prompting is the
//! caller's job (see [`crate::prompt::Prompter::ask_field`]).

use thiserror::Error;

use crate::contact::DELIMITER;
use crate::dates;

/// Digits required in a phone number
pub const PHONE_DIGITS: usize = 8;

/// Reasons a field value is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the name cannot be empty")]
    EmptyName,

    #[error("enter both a given name and a family name")]
    MissingFamilyName,

    #[error("only digits are allowed")]
    PhoneNotNumeric,

    #[error("the phone must have exactly 8 digits")]
    PhoneLength,

    #[error("invalid date format, expected dd/mm/yy (for example 05/11/25)")]
    InvalidDate,

    #[error("the email cannot be empty")]
    EmptyEmail,

    #[error("the email must not contain spaces")]
    EmailWhitespace,

    #[error("the email must contain exactly one '@'")]
    EmailAtCount,

    #[error("the email cannot start or end with '@'")]
    EmailAtPosition,

    #[error("the email must contain at least one '.'")]
    EmailMissingDot,

    #[error("there must be text between '@' and '.'")]
    EmailNoDomainText,

    #[error("there must be text after the last '.'")]
    EmailNoTopLevel,

    #[error("'.' cannot sit right next to '@'")]
    EmailDotNextToAt,

    #[error("the text cannot contain ';'")]
    ContainsDelimiter,
}

fn reject_delimiter(value: &str) -> Result<(), ValidationError> {
    if value.contains(DELIMITER) {
        return Err(ValidationError::ContainsDelimiter);
    }
    Ok(())
}

/// Full name: at least a given name and a family name
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.split_whitespace().count() < 2 {
        return Err(ValidationError::MissingFamilyName);
    }
    reject_delimiter(name)?;
    Ok(name.to_string())
}

/// Phone: exactly eight ASCII digits
pub fn validate_phone(input: &str) -> Result<String, ValidationError> {
    let phone = input.trim();
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotNumeric);
    }
    if phone.len() != PHONE_DIGITS {
        return Err(ValidationError::PhoneLength);
    }
    Ok(phone.to_string())
}

/// Meeting date in the canonical `dd/mm/yy` shape
pub fn validate_date(input: &str) -> Result<String, ValidationError> {
    dates::parse_date(input.trim())
        .map(dates::format_date)
        .ok_or(ValidationError::InvalidDate)
}

/// Email address, checked rule by rule so the first violation is reported
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailWhitespace);
    }
    if email.matches('@').count() != 1 {
        return Err(ValidationError::EmailAtCount);
    }

    let last = email.len() - 1;
    let at = email.find('@').ok_or(ValidationError::EmailAtCount)?;
    if at == 0 || at == last {
        return Err(ValidationError::EmailAtPosition);
    }

    let dot = email.rfind('.').ok_or(ValidationError::EmailMissingDot)?;
    if dot < at + 2 {
        return Err(ValidationError::EmailNoDomainText);
    }
    if dot == last {
        return Err(ValidationError::EmailNoTopLevel);
    }
    if email.contains(".@") || email.contains("@.") {
        return Err(ValidationError::EmailDotNextToAt);
    }
    reject_delimiter(email)?;
    Ok(email.to_string())
}

/// Free-text note; may be empty
pub fn validate_note(input: &str) -> Result<String, ValidationError> {
    let note = input.trim();
    reject_delimiter(note)?;
    Ok(note.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules_report_in_order() {
        assert_eq!(validate_email(""), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::EmailMissingDot));
        assert_eq!(validate_email("a@b."), Err(ValidationError::EmailNoTopLevel));
        assert_eq!(validate_email("ab@c."), Err(ValidationError::EmailNoTopLevel));
        assert_eq!(validate_email("a.@bc.de"), Err(ValidationError::EmailDotNextToAt));
    }

    #[test]
    fn note_may_be_empty() {
        assert_eq!(validate_note("   "), Ok(String::new()));
    }
}
