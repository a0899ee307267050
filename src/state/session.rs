//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionGate` is provided once at the app root and consumed by the route
//! guard, the auth forms, and the logout button. It is the only writer of
//! `SessionState`; consumers read through it or call its operations.
//!
//! The session is fetched exactly once per mount. Later writes (a login, a
//! logout) bump a revision so a slow initial fetch cannot overwrite them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    loading: bool,
    fetch_started: bool,
    revision: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, fetch_started: false, revision: 0 }
    }
}

/// Revision captured when the session fetch started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Claim the single fetch attempt of this mount.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.fetch_started {
            return None;
        }
        self.fetch_started = true;
        Some(FetchTicket(self.revision))
    }

    /// Settle the fetch. Failures leave the user signed out.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Option<User>, ApiError>) {
        match result {
            Ok(user) if ticket.0 == self.revision => self.user = user,
            Ok(_) => {}
            Err(e) => leptos::logging::error!("failed to fetch current user: {e}"),
        }
        self.loading = false;
    }

    pub fn set_user(&mut self, user: User) {
        self.revision += 1;
        self.user = Some(user);
    }

    pub fn begin_log_out(&mut self) {
        self.revision += 1;
        self.loading = true;
    }

    /// Local state is cleared whether or not the server acknowledged.
    pub fn finish_log_out(&mut self, result: Result<(), ApiError>) {
        if let Err(e) = result {
            leptos::logging::error!("log out request failed: {e}");
        }
        self.user = None;
        self.loading = false;
    }
}

/// Shared handle to the session, provided through context.
#[derive(Clone, Copy)]
pub struct SessionGate {
    state: RwSignal<SessionState>,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Tracked read; reactive readers re-run on every change.
    pub fn with_state<U>(&self, f: impl FnOnce(&SessionState) -> U) -> U {
        self.state.with(f)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn set_user(&self, user: User) {
        self.state.update(|s| s.set_user(user));
    }

    /// Fetch the current user unless this mount already did. Repeated calls
    /// during loading return immediately without touching the network.
    pub async fn fetch_once<A: AuthApi>(&self, api: &A) {
        let Some(ticket) = self.state.try_update(SessionState::begin_fetch).flatten() else {
            return;
        };
        let result = api.current_user().await;
        let _ = self.state.try_update(|s| s.finish_fetch(ticket, result));
    }

    pub async fn log_out<A: AuthApi>(&self, api: &A) {
        if self.state.try_update(SessionState::begin_log_out).is_none() {
            return;
        }
        let result = api.log_out().await;
        let _ = self.state.try_update(|s| s.finish_log_out(result));
    }
}
