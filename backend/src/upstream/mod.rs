//! HTTP client for the upstream character API
//!
//! The upstream API exposes `GET /character` (optionally filtered by
//! `status` and/or `species` query parameters) returning a `results`
//! envelope, and `GET /character/{id}` returning a single record. The
//! client is isolated behind the [`CharacterApi`] trait so the rest of the
//! service can run against an in-memory double.

mod error;

pub use error::UpstreamError;

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::types::{Character, CharacterPage};

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Optional filters forwarded to the upstream listing endpoint
///
/// Only present fields become query parameters; an empty filter fetches the
/// unfiltered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    /// Filter by life status, forwarded as the `status` query parameter
    pub status: Option<String>,
    /// Filter by species, forwarded as the `species` query parameter
    pub species: Option<String>,
}

impl CharacterFilter {
    fn as_query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        if let Some(status) = self.status.as_deref() {
            query.push(("status", status));
        }
        if let Some(species) = self.species.as_deref() {
            query.push(("species", species));
        }
        query
    }
}

/// Trait for the upstream character API
#[async_trait::async_trait]
pub trait CharacterApi: Send + Sync {
    /// Fetch one page of characters, optionally filtered by status and/or
    /// species. Upstream paginates; only the first page is read.
    async fn fetch_characters(
        &self,
        filter: &CharacterFilter,
    ) -> Result<CharacterPage, UpstreamError>;

    /// Fetch a single character by its upstream identifier
    async fn fetch_character_by_id(&self, id: u64) -> Result<Character, UpstreamError>;
}

/// HTTP implementation of [`CharacterApi`]
///
/// Holds only immutable configuration; one outbound call per invocation,
/// no caching, no retries.
pub struct CharacterApiClient {
    base_url: String,
    http_client: ClientWithMiddleware,
}

impl CharacterApiClient {
    /// Creates a new upstream API client
    ///
    /// # Panics
    ///
    /// If the HTTP client fails to be created
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let reqwest_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()
            .expect("Failed to create HTTP client");

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self {
            base_url,
            http_client,
        }
    }
}

#[async_trait::async_trait]
impl CharacterApi for CharacterApiClient {
    async fn fetch_characters(
        &self,
        filter: &CharacterFilter,
    ) -> Result<CharacterPage, UpstreamError> {
        let url = format!("{}/character", self.base_url);
        let response = self
            .http_client
            .get(url)
            .query(&filter.as_query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let page = response.json::<CharacterPage>().await?;
        Ok(page)
    }

    async fn fetch_character_by_id(&self, id: u64) -> Result<Character, UpstreamError> {
        let url = format!("{}/character/{id}", self.base_url);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(id));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let character = response.json::<Character>().await?;
        Ok(character)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! In-memory stand-in for the upstream API

    use super::{CharacterApi, CharacterFilter, UpstreamError};
    use crate::types::{Character, CharacterPage};

    /// Fixture-backed [`CharacterApi`] implementation
    ///
    /// Applies the same case-insensitive status/species matching the real
    /// upstream documents, preserving fixture order. Records with an absent
    /// species never match a species filter.
    pub struct MockCharacterApi {
        characters: Vec<Character>,
        fail_with_status: Option<u16>,
    }

    impl MockCharacterApi {
        /// Creates a mock serving the given fixture records
        #[must_use]
        pub fn new(characters: Vec<Character>) -> Self {
            Self {
                characters,
                fail_with_status: None,
            }
        }

        /// Creates a mock whose every call fails with the given upstream
        /// status, for exercising error paths
        #[must_use]
        pub const fn failing_with_status(status: u16) -> Self {
            Self {
                characters: Vec::new(),
                fail_with_status: Some(status),
            }
        }
    }

    #[async_trait::async_trait]
    impl CharacterApi for MockCharacterApi {
        async fn fetch_characters(
            &self,
            filter: &CharacterFilter,
        ) -> Result<CharacterPage, UpstreamError> {
            if let Some(status) = self.fail_with_status {
                return Err(UpstreamError::Status { status });
            }

            let results = self
                .characters
                .iter()
                .filter(|c| matches(filter.status.as_deref(), Some(c.status.as_str())))
                .filter(|c| matches(filter.species.as_deref(), c.species.as_deref()))
                .cloned()
                .collect();

            Ok(CharacterPage { results })
        }

        async fn fetch_character_by_id(&self, id: u64) -> Result<Character, UpstreamError> {
            if let Some(status) = self.fail_with_status {
                return Err(UpstreamError::Status { status });
            }

            self.characters
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(UpstreamError::NotFound(id))
        }
    }

    fn matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
        wanted.is_none_or(|w| actual.is_some_and(|a| a.eq_ignore_ascii_case(w)))
    }
}
