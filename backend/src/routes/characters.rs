use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::characters::CharacterService;
use crate::types::{AppError, Character};

/// Optional filters for the character listing endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCharactersParams {
    /// Filter by life status, e.g. "alive", "dead" or "unknown"
    pub status: Option<String>,
    /// Filter by species, e.g. "Human"
    pub species: Option<String>,
}

/// Query parameters for the species statistic endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SpeciesStatisticParams {
    /// Species to count, e.g. "Human"
    pub species: String,
    /// Life status to count, defaults to "alive" when absent or empty
    pub status: Option<String>,
}

/// Status counted by the statistic endpoint when none is given
const DEFAULT_STATISTIC_STATUS: &str = "alive";

/// List characters, optionally filtered by species and/or status
///
/// Dispatches on which filters are present: both, species only, status
/// only, or neither. Empty-string parameters count as absent. Returns an
/// empty array when upstream reports no matches.
///
/// # Errors
///
/// Returns a `502 BAD_GATEWAY` error when the upstream API is unreachable
/// or returns an unexpected response
#[instrument(skip(characters))]
pub async fn list_characters(
    Extension(characters): Extension<Arc<CharacterService>>,
    Query(params): Query<ListCharactersParams>,
) -> Result<Json<Vec<Character>>, AppError> {
    let species = params.species.as_deref().filter(|s| !s.is_empty());
    let status = params.status.as_deref().filter(|s| !s.is_empty());

    let results = match (species, status) {
        (Some(species), Some(status)) => {
            characters
                .list_by_species_and_status(species, status)
                .await?
        }
        (Some(species), None) => characters.list_by_species(species).await?,
        (None, Some(status)) => characters.list_by_status(status).await?,
        (None, None) => characters.list_all().await?,
    };

    Ok(Json(results))
}

/// Get a single character by its identifier
///
/// # Errors
///
/// Returns a `404 NOT_FOUND` error when upstream reports no character with
/// this identifier, and `502 BAD_GATEWAY` on upstream failures
#[instrument(skip(characters))]
pub async fn get_character_by_id(
    Extension(characters): Extension<Arc<CharacterService>>,
    Path(id): Path<u64>,
) -> Result<Json<Character>, AppError> {
    let character = characters.get_by_id(id).await?;
    Ok(Json(character))
}

/// Count characters of a given species and status
///
/// `species` is required; `status` defaults to "alive" when absent or
/// empty. Both filters are forwarded upstream and the count is returned as
/// a bare number.
///
/// # Errors
///
/// Returns a `502 BAD_GATEWAY` error when the upstream API is unreachable
/// or returns an unexpected response
#[instrument(skip(characters))]
pub async fn species_statistic(
    Extension(characters): Extension<Arc<CharacterService>>,
    Query(params): Query<SpeciesStatisticParams>,
) -> Result<Json<usize>, AppError> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_STATISTIC_STATUS);

    let count = characters
        .count_by_species_and_status(&params.species, status)
        .await?;

    Ok(Json(count))
}
