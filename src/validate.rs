//! Input validation for the sign-in and sign-up boundaries. All checks run
//! before any collaborator call; the first violation short-circuits naming
//! the offending field category.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AuthError, AuthResult, Field};
use crate::profile::{Role, SignupForm};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// Philippine mobile format: +63 or 0 prefix, then exactly ten digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+63|0)\d{10}$").unwrap());
// LTO license format: letter, two digits, hyphen, two digits, hyphen, six digits.
static LICENSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]\d{2}-\d{2}-\d{6}$").unwrap());
// Plate format: three letters then four digits, separators already stripped.
static PLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{3}\d{4}$").unwrap());

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(&strip_whitespace(s))
}

pub fn valid_license(s: &str) -> bool {
    LICENSE_RE.is_match(&strip_whitespace(s))
}

pub fn valid_plate(s: &str) -> bool {
    let compact: String = s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    PLATE_RE.is_match(&compact)
}

/// Sign-in precondition gate: both fields present, email well-formed.
pub fn validate_signin(email: &str, password: &str) -> AuthResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::validation(Field::Email));
    }
    if password.is_empty() {
        return Err(AuthError::validation(Field::Password));
    }
    if !valid_email(email) {
        return Err(AuthError::validation(Field::Email));
    }
    Ok(())
}

fn require(value: &str, field: Field) -> AuthResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::validation(field));
    }
    Ok(())
}

fn require_opt(value: Option<&str>, field: Field) -> AuthResult<()> {
    require(value.unwrap_or_default(), field)
}

/// Sign-up gate: presence of every role-required field, email shape,
/// password confirmation and minimum length, then the format checks.
pub fn validate_signup(role: Role, form: &SignupForm, min_password_len: usize) -> AuthResult<()> {
    require(&form.first_name, Field::FirstName)?;
    require(&form.last_name, Field::LastName)?;
    require(&form.email, Field::Email)?;
    require(&form.phone_number, Field::Phone)?;
    require(&form.password, Field::Password)?;
    if role == Role::Driver {
        require_opt(form.drivers_license.as_deref(), Field::License)?;
        require_opt(form.vehicle_details.as_deref(), Field::Vehicle)?;
        require_opt(form.plate_number.as_deref(), Field::Plate)?;
    }

    if !valid_email(form.email.trim()) {
        return Err(AuthError::validation(Field::Email));
    }
    if form.password != form.confirm_password {
        return Err(AuthError::validation(Field::PasswordConfirmation));
    }
    if form.password.chars().count() < min_password_len {
        return Err(AuthError::validation(Field::Password));
    }
    if !valid_phone(&form.phone_number) {
        return Err(AuthError::validation(Field::Phone));
    }
    if role == Role::Driver {
        if !valid_license(form.drivers_license.as_deref().unwrap_or_default()) {
            return Err(AuthError::validation(Field::License));
        }
        if !valid_plate(form.plate_number.as_deref().unwrap_or_default()) {
            return Err(AuthError::validation(Field::Plate));
        }
    }
    Ok(())
}
