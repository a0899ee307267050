//! GraphQL operation documents and the HTTP envelope they travel in.
//!
//! Requests are `{query, operationName, variables}`; responses are
//! `{data, errors}`. A non-empty `errors` array wins over any partial `data`.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::User;
use crate::error::ApiError;

pub const CURRENT_USER: &str = "query currentUser {
  currentUser {
    id
    email
    firstName
    lastName
  }
}";

pub const USER_EXISTS: &str = "query userExists($input: UserExistsInput!) {
  userExists(input: $input)
}";

pub const LOG_IN: &str = "mutation login($input: LoginInput!) {
  login(input: $input) {
    id
    firstName
    lastName
    email
  }
}";

pub const REGISTER: &str = "mutation register($input: UserRegistrationInput!) {
  register(input: $input) {
    id
    firstName
    lastName
    email
  }
}";

pub const LOG_OUT: &str = "mutation logOut {
  logOut
}";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// `{"input": ...}` wrapper every mutation/query variable set uses.
#[derive(Debug, Serialize)]
pub struct InputVariables<'a, T> {
    pub input: &'a T,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap `data`, surfacing server-reported errors first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::GraphQl`] if the response carries errors, or
    /// [`ApiError::MissingData`] if it carries neither errors nor data.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            let joined = self.errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
            return Err(ApiError::GraphQl(joined));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Decode a raw response body into its `data` payload.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for malformed JSON, otherwise whatever
/// [`GraphQlResponse::into_data`] reports.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: GraphQlResponse<T> = serde_json::from_str(body)?;
    envelope.into_data()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserData {
    pub current_user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExistsData {
    pub user_exists: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogInData {
    pub login: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterData {
    pub register: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutData {
    #[serde(default)]
    pub log_out: Option<serde_json::Value>,
}
