//! Log-in form state.
//!
//! No client-side rules beyond trimming: the server decides whether the
//! credentials match. A `null` answer is a form-level message, not a failure.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::ApiError;
use crate::net::types::{LoginInput, User};

pub const INVALID_CREDENTIALS: &str =
    "A user with that email address and password could not be found. Please check your inputs and try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(User),
    NotFound,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    invalid_credentials: Option<&'static str>,
    submitting: bool,
}

impl LoginForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn invalid_credentials(&self) -> Option<&'static str> {
        self.invalid_credentials
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.invalid_credentials = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.invalid_credentials = None;
    }

    /// Build the request, or `None` if one is already in flight.
    pub fn submit(&mut self) -> Option<LoginInput> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(LoginInput { email: self.email.trim().to_owned(), password: self.password.trim().to_owned() })
    }

    pub fn finish(&mut self, result: Result<Option<User>, ApiError>) -> LoginOutcome {
        match result {
            Ok(Some(user)) => LoginOutcome::LoggedIn(user),
            Ok(None) => {
                self.submitting = false;
                self.invalid_credentials = Some(INVALID_CREDENTIALS);
                LoginOutcome::NotFound
            }
            Err(e) => {
                self.submitting = false;
                leptos::logging::error!("log in failed: {e}");
                LoginOutcome::Failed
            }
        }
    }
}
