use thumbcrafter_core::form::{is_valid_email, validate_submission, ValidationError};

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("user.name@sub.domain.org"));
    assert!(is_valid_email("first+tag@example.com"));
}

#[test]
fn rejects_missing_dot_in_domain() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn rejects_whitespace_anywhere() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@c.com "));
}

#[test]
fn rejects_empty_and_degenerate_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@@b.co"));
}

#[test]
fn complete_submission_passes() {
    assert_eq!(
        validate_submission("Ada", "ada@example.com", "Hello there"),
        Ok(())
    );
}

#[test]
fn any_blank_field_is_missing() {
    let err = Err(ValidationError::MissingField);
    assert_eq!(validate_submission("", "ada@example.com", "Hi"), err);
    assert_eq!(validate_submission("Ada", "", "Hi"), err);
    assert_eq!(validate_submission("Ada", "ada@example.com", ""), err);
    assert_eq!(validate_submission("   ", "ada@example.com", "Hi"), err);
}

#[test]
fn missing_field_wins_over_bad_email() {
    assert_eq!(
        validate_submission("Ada", "", ""),
        Err(ValidationError::MissingField)
    );
}

#[test]
fn bad_email_reported_when_fields_present() {
    assert_eq!(
        validate_submission("Ada", "not-an-email", "Hi"),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn errors_carry_user_facing_messages() {
    assert_eq!(
        ValidationError::MissingField.message(),
        "Please fill in all fields."
    );
    assert_eq!(
        ValidationError::InvalidEmail.message(),
        "Please enter a valid email address."
    );
}
