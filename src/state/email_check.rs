//! Email uniqueness checker for the registration form.
//!
//! DESIGN
//! ======
//! Each settled (debounced) email goes through client-side shape validation
//! and then a server `userExists` round-trip. The checker is an explicit
//! state machine: callers drive it with `on_debounced_change`, `begin_check`,
//! and `commit`, and perform the network call in between.
//!
//! Server answers can arrive after the user has typed something else, so
//! every check hands out a `CheckTicket` carrying the email it was started
//! for. `commit` compares that email with the current debounced value and
//! drops the answer when they differ; the checker then goes back to `Idle`
//! so the caller can start a check for the newer value.

#[cfg(test)]
#[path = "email_check_test.rs"]
mod email_check_test;

use crate::error::{ApiError, FieldError};
use crate::util::validation::validate_email;

/// Where the check for the current email stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckPhase {
    /// The current value has not been checked yet.
    Idle,
    ClientValidating { email: String },
    ServerChecking { email: String },
    Resolved { email: String, error: Option<FieldError> },
    /// The server could not be reached; nothing is shown and nothing retries
    /// until the value changes or the user submits again.
    Failed { email: String },
}

/// Last server verdict: `confirmed` is true when no account used `email`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfirmation {
    pub email: String,
    pub confirmed: bool,
}

/// Proof of which email a server check was started for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckTicket {
    email: String,
}

impl CheckTicket {
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// What `commit` did with a server answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The answer was for an email that is no longer current.
    Stale,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailCheck {
    current: String,
    phase: CheckPhase,
    error: Option<FieldError>,
    confirmation: Option<EmailConfirmation>,
}

impl Default for EmailCheck {
    fn default() -> Self {
        Self {
            current: String::new(),
            phase: CheckPhase::Idle,
            error: Some(FieldError::EmailRequired),
            confirmation: None,
        }
    }
}

impl EmailCheck {
    /// Trimmed debounced email the checker is tracking.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn phase(&self) -> &CheckPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    pub fn confirmation(&self) -> Option<&EmailConfirmation> {
        self.confirmation.as_ref()
    }

    /// True while a client or server check is running.
    pub fn is_loading(&self) -> bool {
        self.in_flight_email().is_some()
    }

    /// The current email, if the server confirmed it is free.
    pub fn confirmed_email(&self) -> Option<&str> {
        self.confirmation
            .as_ref()
            .filter(|c| c.confirmed && c.email == self.current)
            .map(|c| c.email.as_str())
    }

    fn in_flight_email(&self) -> Option<&str> {
        match &self.phase {
            CheckPhase::ClientValidating { email } | CheckPhase::ServerChecking { email } => Some(email),
            _ => None,
        }
    }

    /// A new debounced value arrived. Clears the previous error; a check that
    /// is already running keeps running and is judged on commit.
    pub fn on_debounced_change(&mut self, raw: &str) {
        let email = raw.trim();
        if email == self.current && !matches!(self.phase, CheckPhase::Idle) {
            return;
        }
        self.current = email.to_owned();
        self.error = None;
        if self.is_loading() {
            return;
        }
        self.phase = CheckPhase::Idle;
        self.restore_cached();
    }

    /// Start checking the current value if nothing is running and it has no
    /// verdict yet. Client validation happens here; a ticket is returned only
    /// when a server round-trip is needed.
    pub fn begin_check(&mut self) -> Option<CheckTicket> {
        if !matches!(self.phase, CheckPhase::Idle) {
            return None;
        }
        let email = self.current.clone();
        self.phase = CheckPhase::ClientValidating { email: email.clone() };

        if let Some(error) = validate_email(&email) {
            self.error = Some(error);
            self.phase = CheckPhase::Resolved { email, error: Some(error) };
            return None;
        }

        self.phase = CheckPhase::ServerChecking { email: email.clone() };
        Some(CheckTicket { email })
    }

    /// Apply the server's answer for `ticket`.
    pub fn commit(&mut self, ticket: CheckTicket, result: Result<bool, ApiError>) -> CommitOutcome {
        if self.in_flight_email() == Some(ticket.email.as_str()) {
            self.phase = CheckPhase::Idle;
        }

        if ticket.email != self.current {
            self.restore_cached();
            return CommitOutcome::Stale;
        }

        match result {
            Ok(exists) => {
                let error = exists.then_some(FieldError::EmailTaken);
                self.error = error;
                self.confirmation = Some(EmailConfirmation { email: ticket.email.clone(), confirmed: !exists });
                self.phase = CheckPhase::Resolved { email: ticket.email, error };
                CommitOutcome::Applied
            }
            Err(e) => {
                leptos::logging::error!("email availability check failed: {e}");
                self.phase = CheckPhase::Failed { email: ticket.email };
                CommitOutcome::Failed
            }
        }
    }

    /// Re-arm a check that failed on transport so the next `begin_check`
    /// queries the server again.
    pub fn rearm_failed(&mut self) -> bool {
        if matches!(&self.phase, CheckPhase::Failed { email } if *email == self.current) {
            self.phase = CheckPhase::Idle;
            return true;
        }
        false
    }

    /// An idle checker whose value already has a server verdict reuses it.
    fn restore_cached(&mut self) {
        if !matches!(self.phase, CheckPhase::Idle) {
            return;
        }
        if let Some(cached) = self.confirmation.as_ref().filter(|c| c.email == self.current) {
            let error = (!cached.confirmed).then_some(FieldError::EmailTaken);
            self.error = error;
            self.phase = CheckPhase::Resolved { email: cached.email.clone(), error };
        }
    }
}
