//! Synchronous field validators for the auth forms.
//!
//! Every rule trims its input first, so leading and trailing whitespace is
//! never significant. The validators are pure and cheap enough to run on
//! every keystroke.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::error::FieldError;

pub const MIN_PASSWORD_LEN: usize = 6;

const LOCAL_SPECIALS: [char; 19] = [
    '!', '#', '$', '%', '&', '\'', '*', '+', '-', '/', '=', '?', '^', '_', '`', '{', '|', '}', '~',
];
const LABEL_INNER: [char; 4] = ['-', '.', '_', '~'];

/// Registration form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

pub fn validate_first_name(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::FirstNameRequired)
}

pub fn validate_last_name(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::LastNameRequired)
}

pub fn validate_password(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::PasswordRequired);
    }
    if trimmed.chars().count() < MIN_PASSWORD_LEN {
        return Some(FieldError::PasswordTooShort);
    }
    None
}

/// Confirmation must equal the password after both are trimmed.
pub fn validate_confirm_password(value: &str, password: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::ConfirmPasswordRequired);
    }
    if trimmed != password.trim() {
        return Some(FieldError::PasswordMismatch);
    }
    None
}

/// Client-side shape check only; uniqueness is confirmed by the server.
pub fn validate_email(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    if !is_email_shape(trimmed) {
        return Some(FieldError::EmailInvalid);
    }
    None
}

/// `local@domain` where the local part is dot-separated atoms and the
/// domain ends in a label that starts and ends with a letter. Case is
/// ignored and non-ASCII letters from the Basic Multilingual Plane count as
/// word characters on both sides.
fn is_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    local.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atom_char))
}

/// The domain splits at some `.` into a head of labels and a final label.
/// Labels may carry `-`, `.`, `_` and `~` inside but not at either end.
fn valid_domain(domain: &str) -> bool {
    domain.char_indices().filter(|&(_, c)| c == '.').any(|(i, _)| {
        let (head, tail) = (&domain[..i], &domain[i + 1..]);
        valid_label(head, is_word_char) && valid_label(tail, is_letter)
    })
}

fn valid_label(label: &str, is_edge: fn(char) -> bool) -> bool {
    let (Some(first), Some(last)) = (label.chars().next(), label.chars().last()) else {
        return false;
    };
    is_edge(first) && is_edge(last) && label.chars().all(|c| is_word_char(c) || LABEL_INNER.contains(&c))
}

fn is_atom_char(c: char) -> bool {
    is_word_char(c) || LOCAL_SPECIALS.contains(&c)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_digit() || is_letter(c)
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || is_extended_letter(c)
}

fn is_extended_letter(c: char) -> bool {
    matches!(c, '\u{00A0}'..='\u{D7FF}' | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFEF}')
}
