#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    InvalidEmail,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "Please fill in all fields.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Accepts `local@domain.tld` where no part contains whitespace or an extra
/// `@`, and the domain has a dot with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
