//! In-memory `AuthApi` for tests. Records every call it receives.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::api::AuthApi;
use super::types::{LoginInput, RegistrationInput, User};
use crate::error::ApiError;

#[derive(Default)]
pub struct MockApi {
    pub current_user: Option<User>,
    pub current_user_fails: bool,
    pub existing_emails: Vec<String>,
    pub user_exists_fails: bool,
    /// `(email, password, identity)` triples `log_in` accepts.
    pub accounts: Vec<(String, String, User)>,
    pub register_response: Option<User>,
    pub register_fails: bool,
    pub log_out_fails: bool,

    pub current_user_calls: Cell<u32>,
    pub user_exists_calls: RefCell<Vec<String>>,
    pub log_in_calls: RefCell<Vec<LoginInput>>,
    pub register_calls: RefCell<Vec<RegistrationInput>>,
    pub log_out_calls: Cell<u32>,
}

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_owned(),
        email: email.to_owned(),
        first_name: "Test".to_owned(),
        last_name: "Testerson".to_owned(),
    }
}

fn offline() -> ApiError {
    ApiError::Transport("offline".to_owned())
}

/// Returns `Pending` once so concurrent callers interleave at the await.
#[derive(Default)]
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

impl AuthApi for MockApi {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        self.current_user_calls.set(self.current_user_calls.get() + 1);
        YieldOnce::default().await;
        if self.current_user_fails {
            return Err(offline());
        }
        Ok(self.current_user.clone())
    }

    async fn user_exists(&self, email: &str) -> Result<bool, ApiError> {
        self.user_exists_calls.borrow_mut().push(email.to_owned());
        if self.user_exists_fails {
            return Err(offline());
        }
        Ok(self.existing_emails.iter().any(|e| e == email))
    }

    async fn log_in(&self, input: &LoginInput) -> Result<Option<User>, ApiError> {
        self.log_in_calls.borrow_mut().push(input.clone());
        Ok(self
            .accounts
            .iter()
            .find(|(email, password, _)| *email == input.email && *password == input.password)
            .map(|(_, _, user)| user.clone()))
    }

    async fn register(&self, input: &RegistrationInput) -> Result<Option<User>, ApiError> {
        self.register_calls.borrow_mut().push(input.clone());
        if self.register_fails {
            return Err(offline());
        }
        Ok(self.register_response.clone())
    }

    async fn log_out(&self) -> Result<(), ApiError> {
        self.log_out_calls.set(self.log_out_calls.get() + 1);
        if self.log_out_fails {
            return Err(offline());
        }
        Ok(())
    }
}
