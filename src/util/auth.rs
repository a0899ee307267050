//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session-gated routes and the auth forms must agree on where users land,
//! so the paths and the guard decision live here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

pub const LOG_IN_PATH: &str = "/log-in";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";

/// What a session-gated route shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: placeholder only, no redirect yet.
    Loading,
    /// Signed in: render the protected view.
    Render,
    /// Signed out: redirect to [`LOG_IN_PATH`].
    Redirect,
}

pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if state.loading() {
        GuardDecision::Loading
    } else if state.user().is_some() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}
