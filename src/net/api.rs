//! Remote auth operations and the GraphQL client that performs them.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, cookies included so
//! the server session travels with every request.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A `null` answer from the server (no session, no matching credentials) is
//! `Ok(None)`. Only transport, HTTP, decode, and GraphQL-level failures are
//! `Err`, and callers log those instead of showing them to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::graphql::{
    CURRENT_USER, CurrentUserData, GraphQlRequest, InputVariables, LOG_IN, LOG_OUT, LogInData, LogOutData,
    REGISTER, RegisterData, USER_EXISTS, UserExistsData,
};
use super::types::{LoginInput, RegistrationInput, User, UserExistsInput};
use crate::error::ApiError;

/// The remote operations the auth flow depends on.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Identity bound to the current session cookie, if any.
    async fn current_user(&self) -> Result<Option<User>, ApiError>;

    /// Whether an account already uses `email`.
    async fn user_exists(&self, email: &str) -> Result<bool, ApiError>;

    /// `Ok(None)` means no account matched the credentials.
    async fn log_in(&self, input: &LoginInput) -> Result<Option<User>, ApiError>;

    async fn register(&self, input: &RegistrationInput) -> Result<Option<User>, ApiError>;

    async fn log_out(&self) -> Result<(), ApiError>;
}

/// HTTP client for the GraphQL endpoint chosen by [`crate::util::env`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphQlApi {
    endpoint: String,
}

impl GraphQlApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &str, operation_name: &str, variables: Option<V>) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, operation_name, variables };
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .json(&request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            super::graphql::decode(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for GraphQlApi {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let data: CurrentUserData = self.execute::<(), _>(CURRENT_USER, "currentUser", None).await?;
        Ok(data.current_user)
    }

    async fn user_exists(&self, email: &str) -> Result<bool, ApiError> {
        let input = user_exists_input(email);
        let data: UserExistsData = self
            .execute(USER_EXISTS, "userExists", Some(InputVariables { input: &input }))
            .await?;
        Ok(data.user_exists)
    }

    async fn log_in(&self, input: &LoginInput) -> Result<Option<User>, ApiError> {
        let data: LogInData = self.execute(LOG_IN, "login", Some(InputVariables { input })).await?;
        Ok(data.login)
    }

    async fn register(&self, input: &RegistrationInput) -> Result<Option<User>, ApiError> {
        let data: RegisterData = self.execute(REGISTER, "register", Some(InputVariables { input })).await?;
        Ok(data.register)
    }

    async fn log_out(&self) -> Result<(), ApiError> {
        let _: LogOutData = self.execute::<(), _>(LOG_OUT, "logOut", None).await?;
        Ok(())
    }
}

fn user_exists_input(email: &str) -> UserExistsInput {
    UserExistsInput { email: email.trim().to_owned() }
}
