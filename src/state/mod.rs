//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `registration`, `login`,
//! `email_check`) so each page depends on a small focused model. Every model
//! is a plain struct with explicit transitions; pages wrap them in signals.

pub mod email_check;
pub mod login;
pub mod registration;
pub mod session;
