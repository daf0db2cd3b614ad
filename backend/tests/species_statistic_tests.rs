mod common;

use common::*;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_species_statistic_counts_matching_characters() {
    let router = test_router(rick_and_morty());

    let response =
        send_get_request(&router, "/characters/species-statistic?species=Human&status=alive")
            .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(2));
}

#[tokio::test]
async fn test_species_statistic_defaults_status_to_alive() {
    // Adjudicator Rick is Dead and must not be counted without an explicit
    // status filter
    let router = test_router(full_cast());

    let response = send_get_request(&router, "/characters/species-statistic?species=Human").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(2));
}

#[tokio::test]
async fn test_species_statistic_empty_status_falls_back_to_default() {
    // Adjudicator Rick is Dead; an empty status must count alive humans
    // only, exactly as an absent one does
    let router = test_router(full_cast());

    let response =
        send_get_request(&router, "/characters/species-statistic?species=Human&status=").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(2));
}

#[tokio::test]
async fn test_species_statistic_with_explicit_status() {
    let router = test_router(full_cast());

    let response =
        send_get_request(&router, "/characters/species-statistic?species=Human&status=dead")
            .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(1));
}

#[tokio::test]
async fn test_species_statistic_zero_matches_returns_zero() {
    let router = test_router(full_cast());

    let response =
        send_get_request(&router, "/characters/species-statistic?species=Zorblaxian").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(0));
}

#[tokio::test]
async fn test_species_statistic_missing_species_returns_bad_request() {
    let router = test_router(full_cast());

    let response = send_get_request(&router, "/characters/species-statistic").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_species_statistic_does_not_count_null_species_records() {
    // Glorzo is Alive with no species field; the upstream species filter
    // never matches it
    let router = test_router(full_cast());

    let response =
        send_get_request(&router, "/characters/species-statistic?species=Alien&status=alive")
            .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body, json!(1));
}
