//! Deployment environment resolution.
//!
//! The hosting origin decides which API endpoint the client talks to. The
//! mapping is fixed at build time; an origin outside it is a fatal startup
//! condition.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use crate::error::ConfigError;

const DEVELOPMENT_ORIGIN: &str = "http://localhost:3000";
const PRODUCTION_ORIGIN: &str = "https://budgie-web.vercel.app";
const STAGING_ORIGIN_PREFIX: &str = "https://budgie-web-";
const STAGING_ORIGIN_SUFFIX: &str = ".vercel.app";

const DEVELOPMENT_API: &str = "http://localhost:4000/graphql";
const STAGING_API: &str = "https://api-budgie-staging.vercel/graphql";
const PRODUCTION_API: &str = "https://api-budgie.vercel.app/graphql";

/// Deployment tier the client is running in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    /// Per-branch staging deployments.
    Test,
    Production,
}

/// Resolved runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub environment: Environment,
    pub api_host: &'static str,
}

impl EnvConfig {
    /// Map a page origin onto its environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownOrigin`] if the origin is not one of the
    /// known deployments.
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        if origin == DEVELOPMENT_ORIGIN {
            return Ok(Self { environment: Environment::Development, api_host: DEVELOPMENT_API });
        }
        if is_staging_origin(origin) {
            leptos::logging::warn!(
                "You are currently running Budgie in the staging environment: things could be a little shaky."
            );
            return Ok(Self { environment: Environment::Test, api_host: STAGING_API });
        }
        if origin == PRODUCTION_ORIGIN {
            return Ok(Self { environment: Environment::Production, api_host: PRODUCTION_API });
        }
        Err(ConfigError::UnknownOrigin(origin.to_owned()))
    }

    /// Resolve from `window.location.origin`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownOrigin`] if the origin cannot be read or
    /// is not a known deployment.
    #[cfg(feature = "csr")]
    pub fn from_window() -> Result<Self, ConfigError> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::from_origin(&origin)
    }
}

/// Vercel creates one deployment per branch: `https://budgie-web-<branch>.vercel.app`.
fn is_staging_origin(origin: &str) -> bool {
    origin
        .strip_prefix(STAGING_ORIGIN_PREFIX)
        .and_then(|rest| rest.strip_suffix(STAGING_ORIGIN_SUFFIX))
        .is_some()
}
