use std::path::PathBuf;

use agenda::error::{exit_codes, Error};
use agenda::validate::ValidationError;

#[test]
fn exit_codes_map_correctly() {
    let user = Error::InvalidArgument("bad".to_string());
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let field = Error::invalid_field("phone", ValidationError::PhoneLength);
    assert_eq!(field.exit_code(), exit_codes::USER_ERROR);

    let missing = Error::AgendaNotFound(PathBuf::from("work.txt"));
    assert_eq!(missing.exit_code(), exit_codes::USER_ERROR);

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let storage = Error::storage("work.txt", io);
    assert_eq!(storage.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn invalid_field_message_names_field() {
    let err = Error::invalid_field("phone", ValidationError::PhoneLength);
    assert_eq!(
        err.to_string(),
        "Invalid phone: the phone must have exactly 8 digits"
    );
}

#[test]
fn ambiguous_contact_details_list_candidates() {
    let err = Error::AmbiguousContact {
        fragment: "lopez".to_string(),
        candidates: vec!["Ana Lopez".to_string(), "Juan Lopez".to_string()],
    };
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert_eq!(err.to_string(), "'lopez' matches 2 contacts");

    let details = err.details().expect("details");
    assert_eq!(details["candidates"][1], "Juan Lopez");
}
