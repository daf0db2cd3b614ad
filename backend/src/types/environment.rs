//! Environment configuration for different deployment stages

use std::env;

/// Base URL of the public character API, used when no override is set
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the base URL of the upstream character API
    ///
    /// Reads `UPSTREAM_BASE_URL` when set (useful for pointing the facade at
    /// a local stub), otherwise falls back to the public API. Trailing
    /// slashes are stripped so path concatenation stays predictable.
    #[must_use]
    pub fn upstream_base_url(&self) -> String {
        env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns whether the API docs routes should be exposed
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        !matches!(self, Self::Production)
    }
}
