//! Networking modules for the GraphQL API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the remote operations and the HTTP client, `graphql` holds
//! the operation documents and the request/response envelope, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod graphql;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_api;
