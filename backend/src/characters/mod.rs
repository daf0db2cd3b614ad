//! Query service over the upstream character API
//!
//! Each operation is a pure delegation to the upstream client; the only
//! reshaping done here is unwrapping the `results` envelope. No sorting,
//! deduplication or enrichment happens in this layer.

use std::sync::Arc;

use crate::types::Character;
use crate::upstream::{CharacterApi, CharacterFilter, UpstreamError};

/// Thin delegation layer between the HTTP routes and the upstream client
#[derive(Clone)]
pub struct CharacterService {
    api: Arc<dyn CharacterApi>,
}

impl CharacterService {
    /// Creates a new service backed by the given upstream API
    #[must_use]
    pub fn new(api: Arc<dyn CharacterApi>) -> Self {
        Self { api }
    }

    /// Lists all characters without any filter
    ///
    /// # Errors
    ///
    /// Propagates any [`UpstreamError`] from the client unmodified
    pub async fn list_all(&self) -> Result<Vec<Character>, UpstreamError> {
        let page = self.api.fetch_characters(&CharacterFilter::default()).await?;
        Ok(page.results)
    }

    /// Lists characters filtered by status
    ///
    /// # Errors
    ///
    /// Propagates any [`UpstreamError`] from the client unmodified
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Character>, UpstreamError> {
        let filter = CharacterFilter {
            status: Some(status.to_string()),
            species: None,
        };
        let page = self.api.fetch_characters(&filter).await?;
        Ok(page.results)
    }

    /// Lists characters filtered by species
    ///
    /// # Errors
    ///
    /// Propagates any [`UpstreamError`] from the client unmodified
    pub async fn list_by_species(&self, species: &str) -> Result<Vec<Character>, UpstreamError> {
        let filter = CharacterFilter {
            status: None,
            species: Some(species.to_string()),
        };
        let page = self.api.fetch_characters(&filter).await?;
        Ok(page.results)
    }

    /// Lists characters filtered by both species and status
    ///
    /// # Errors
    ///
    /// Propagates any [`UpstreamError`] from the client unmodified
    pub async fn list_by_species_and_status(
        &self,
        species: &str,
        status: &str,
    ) -> Result<Vec<Character>, UpstreamError> {
        let filter = CharacterFilter {
            status: Some(status.to_string()),
            species: Some(species.to_string()),
        };
        let page = self.api.fetch_characters(&filter).await?;
        Ok(page.results)
    }

    /// Fetches a single character by its upstream identifier
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::NotFound`] when upstream reports no such
    /// record; other upstream failures propagate unmodified
    pub async fn get_by_id(&self, id: u64) -> Result<Character, UpstreamError> {
        self.api.fetch_character_by_id(id).await
    }

    /// Counts characters of the given species and status
    ///
    /// Both filters are pushed upstream and the page length is returned;
    /// no local post-filtering happens.
    ///
    /// # Errors
    ///
    /// Propagates any [`UpstreamError`] from the client unmodified
    pub async fn count_by_species_and_status(
        &self,
        species: &str,
        status: &str,
    ) -> Result<usize, UpstreamError> {
        let results = self.list_by_species_and_status(species, status).await?;
        Ok(results.len())
    }
}
