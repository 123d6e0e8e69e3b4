//! User input checks.

use crate::error::CoreError;
use crate::listing::validate_required;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimal structural email check: one `@` with non-empty local and domain
/// parts, and a dot somewhere in the domain.
///
/// Deliverability is not checked here.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("invalid email address: {email:?}"));

    if email.len() > MAX_EMAIL_LENGTH || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validate the fields of a new account.
pub fn validate_new_user(name: &str, email: &str, password: &str) -> Result<(), CoreError> {
    validate_required("name", name)?;
    validate_email(email)?;
    validate_required("password", password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(validate_email("tristanjacobs@gmail.com").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "no-at-sign", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@.com"] {
            assert!(validate_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn new_user_requires_name_and_password() {
        assert!(validate_new_user("Eva", "eva@example.com", "hash").is_ok());
        assert!(validate_new_user("", "eva@example.com", "hash").is_err());
        assert!(validate_new_user("Eva", "eva@example.com", " ").is_err());
    }
}
