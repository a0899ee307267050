//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, async calls,
//! navigation) and delegates rules to `state` and rendering details to
//! `components`.

pub mod home;
pub mod log_in;
pub mod register;
