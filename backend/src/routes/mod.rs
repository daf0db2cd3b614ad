/// Character listing, lookup and statistic routes
pub mod characters;
mod docs;
/// Health check route
pub mod health;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/characters", get(characters::list_characters))
        .api_route(
            "/characters/species-statistic",
            get(characters::species_statistic),
        )
        .api_route("/characters/{id}", get(characters::get_character_by_id))
}
