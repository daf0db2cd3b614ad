// Not every helper is used in every test file, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use backend::characters::CharacterService;
use backend::routes;
use backend::types::{Character, Environment};
use backend::upstream::mock::MockCharacterApi;
use tower::ServiceExt;

/// Builds the real router with a fixture-backed mock upstream injected
pub fn test_router(characters: Vec<Character>) -> Router {
    test_router_with_env(Environment::Development, characters)
}

/// Same as [`test_router`] but with an explicit environment
pub fn test_router_with_env(environment: Environment, characters: Vec<Character>) -> Router {
    router_for_api(environment, MockCharacterApi::new(characters))
}

/// Builds the real router over a mock upstream that fails every call with
/// the given status
pub fn failing_router(status: u16) -> Router {
    router_for_api(
        Environment::Development,
        MockCharacterApi::failing_with_status(status),
    )
}

fn router_for_api(environment: Environment, api: MockCharacterApi) -> Router {
    let service = Arc::new(CharacterService::new(Arc::new(api)));

    routes::handler()
        .layer(Extension(OpenApi::default()))
        .layer(Extension(environment))
        .layer(Extension(service))
        .into()
}

/// The two-record fixture from the upstream API's first page
pub fn rick_and_morty() -> Vec<Character> {
    vec![
        character(1, "Rick Sanchez", Some("Human"), "Alive"),
        character(2, "Morty Smith", Some("Human"), "Alive"),
    ]
}

/// A larger fixture mixing species, statuses and one null-species record
pub fn full_cast() -> Vec<Character> {
    vec![
        character(1, "Rick Sanchez", Some("Human"), "Alive"),
        character(2, "Morty Smith", Some("Human"), "Alive"),
        character(8, "Adjudicator Rick", Some("Human"), "Dead"),
        character(23, "Arcade Alien", Some("Alien"), "unknown"),
        character(47, "Alien Morty", Some("Alien"), "Alive"),
        character(99, "Glorzo", None, "Alive"),
    ]
}

pub fn character(id: u64, name: &str, species: Option<&str>, status: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        species: species.map(ToString::to_string),
        status: status.to_string(),
    }
}

pub async fn send_get_request(router: &Router, route: &str) -> Response {
    let request = Request::builder()
        .uri(route)
        .method("GET")
        .body(Body::empty())
        .expect("Failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}
