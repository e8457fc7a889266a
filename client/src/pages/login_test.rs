use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret1"),
        Ok(("alice".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("alice", " pass word "),
        Ok(("alice".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret1"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("   ", "secret1"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("alice", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn missing_credentials_message_matches_ui_copy() {
    assert_eq!(MISSING_CREDENTIALS, "Username and password are required");
}
