//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and route gating while reading shared state
//! from Leptos context providers.

pub mod authenticated_route;
pub mod form_field;
