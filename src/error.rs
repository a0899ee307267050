//! Error taxonomy shared by the transport, configuration, and form layers.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` never reaches the rendering layer: every async call site
//! consumes it, logs it, and resets its loading flag. `FieldError` is the
//! only error a user ever reads, and its `Display` text is the exact inline
//! message. `ConfigError` is fatal and only raised at startup.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a remote call. Distinct from a `null` answer, which callers
/// receive as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("graphql error: {0}")]
    GraphQl(String),
    #[error("response carried no data")]
    MissingData,
    #[error("not available outside the browser")]
    Unavailable,
}

/// Fatal startup misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("client running in an unknown environment {0}")]
    UnknownOrigin(String),
}

/// Inline validation failure for a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please provide your first name")]
    FirstNameRequired,
    #[error("Please provide your last name")]
    LastNameRequired,
    #[error("Please provide your email")]
    EmailRequired,
    #[error("Please provide a valid email")]
    EmailInvalid,
    #[error("That email already exists in our records. Please log in, or create an account with a different email.")]
    EmailTaken,
    #[error("Please provide a password")]
    PasswordRequired,
    #[error("Please create a password that is at least 6 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Password inputs don't match")]
    PasswordMismatch,
}
