//! Registration form controller.
//!
//! DESIGN
//! ======
//! Owns every field value and its error. Non-email fields are validated
//! synchronously on each change; the email field is delegated to
//! `EmailCheck`, which sees only debounced values. Errors are always derived
//! from the latest value and are hidden until the first submit attempt,
//! except for the email loading indicator and the "already exists" verdict,
//! which show immediately.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use super::email_check::{CheckTicket, CommitOutcome, EmailCheck};
use crate::error::{ApiError, FieldError};
use crate::net::types::{RegistrationInput, User};
use crate::util::validation::{
    Field, validate_confirm_password, validate_first_name, validate_last_name, validate_password,
};

pub const REGISTRATION_REJECTED: &str = "We couldn't create your account. Please try again.";

/// One form input and the error derived from its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    error: Option<FieldError>,
}

impl FieldState {
    fn new(error: Option<FieldError>) -> Self {
        Self { value: String::new(), error }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }
}

/// Result of pressing "Register".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field has an error; nothing is sent.
    Invalid,
    /// The email has no server confirmation for its current value yet.
    AwaitingEmail,
    /// A registration call is already running.
    InFlight,
    Ready(RegistrationInput),
}

/// Result of the registration call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(User),
    /// The server answered `null`.
    Rejected,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationForm {
    first_name: FieldState,
    last_name: FieldState,
    password: FieldState,
    confirm_password: FieldState,
    email_input: String,
    email: EmailCheck,
    did_attempt_submit: bool,
    submitting: bool,
    form_error: Option<&'static str>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: FieldState::new(validate_first_name("")),
            last_name: FieldState::new(validate_last_name("")),
            password: FieldState::new(validate_password("")),
            confirm_password: FieldState::new(validate_confirm_password("", "")),
            email_input: String::new(),
            email: EmailCheck::default(),
            did_attempt_submit: false,
            submitting: false,
            form_error: None,
        }
    }
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => self.first_name.value(),
            Field::LastName => self.last_name.value(),
            Field::Email => &self.email_input,
            Field::Password => self.password.value(),
            Field::ConfirmPassword => self.confirm_password.value(),
        }
    }

    /// Current error for `field`, whether or not it is shown.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FirstName => self.first_name.error(),
            Field::LastName => self.last_name.error(),
            Field::Email => self.email.error(),
            Field::Password => self.password.error(),
            Field::ConfirmPassword => self.confirm_password.error(),
        }
    }

    pub fn email(&self) -> &EmailCheck {
        &self.email
    }

    pub fn did_attempt_submit(&self) -> bool {
        self.did_attempt_submit
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    /// Record a keystroke. The email value only reaches the checker once it
    /// has been debounced, see [`Self::on_debounced_email`].
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form_error = None;
        match field {
            Field::FirstName => {
                self.first_name.error = validate_first_name(&value);
                self.first_name.value = value;
            }
            Field::LastName => {
                self.last_name.error = validate_last_name(&value);
                self.last_name.value = value;
            }
            Field::Email => self.email_input = value,
            Field::Password => {
                self.password.error = validate_password(&value);
                self.password.value = value;
                self.revalidate_confirmation();
            }
            Field::ConfirmPassword => {
                self.confirm_password.value = value;
                self.revalidate_confirmation();
            }
        }
    }

    fn revalidate_confirmation(&mut self) {
        self.confirm_password.error = validate_confirm_password(&self.confirm_password.value, &self.password.value);
    }

    pub fn on_debounced_email(&mut self, email: &str) {
        self.email.on_debounced_change(email);
    }

    pub fn begin_email_check(&mut self) -> Option<CheckTicket> {
        self.email.begin_check()
    }

    pub fn commit_email_check(&mut self, ticket: CheckTicket, result: Result<bool, ApiError>) -> CommitOutcome {
        self.email.commit(ticket, result)
    }

    pub fn has_errors(&self) -> bool {
        [Field::FirstName, Field::LastName, Field::Email, Field::Password, Field::ConfirmPassword]
            .into_iter()
            .any(|field| self.error(field).is_some())
    }

    /// Error text to render next to `field`.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if field == Field::Email {
            if self.email.is_loading() {
                return None;
            }
            return match self.email.error() {
                Some(FieldError::EmailTaken) => Some(FieldError::EmailTaken),
                other => other.filter(|_| self.did_attempt_submit),
            };
        }
        self.error(field).filter(|_| self.did_attempt_submit)
    }

    pub fn email_loading_visible(&self) -> bool {
        self.email.is_loading()
    }

    /// The button stays enabled until the first attempt so that errors are
    /// disclosed by clicking it.
    pub fn submit_disabled(&self) -> bool {
        self.did_attempt_submit
            && self.has_errors()
            && (self.email.is_loading() || self.email.confirmed_email().is_none())
    }

    /// Attempt submission. Only `Ready` should be followed by a network call.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.did_attempt_submit = true;
        self.form_error = None;

        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        if self.has_errors() {
            return SubmitOutcome::Invalid;
        }
        let Some(email) = self.email.confirmed_email() else {
            self.email.rearm_failed();
            return SubmitOutcome::AwaitingEmail;
        };

        let input = RegistrationInput {
            first_name: self.first_name.value.trim().to_owned(),
            last_name: self.last_name.value.trim().to_owned(),
            email: email.to_owned(),
            password: self.password.value.trim().to_owned(),
        };
        self.submitting = true;
        SubmitOutcome::Ready(input)
    }

    pub fn finish_submit(&mut self, result: Result<Option<User>, ApiError>) -> RegistrationOutcome {
        self.submitting = false;
        match result {
            Ok(Some(user)) => RegistrationOutcome::Registered(user),
            Ok(None) => {
                self.form_error = Some(REGISTRATION_REJECTED);
                RegistrationOutcome::Rejected
            }
            Err(e) => {
                leptos::logging::error!("registration failed: {e}");
                RegistrationOutcome::Failed
            }
        }
    }
}
