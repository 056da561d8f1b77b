use crate::ApiError;

use fr_auth::AuthError;
use fr_core::ErrorLocation;
use fr_db::DbError;
use fr_media::MediaError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_each_variant_when_rendered_then_status_and_error_body_match() {
    let cases = [
        (ApiError::validation("bad"), StatusCode::BAD_REQUEST, "bad"),
        (ApiError::unauthorized("who"), StatusCode::UNAUTHORIZED, "who"),
        (ApiError::not_found("gone"), StatusCode::NOT_FOUND, "gone"),
        (ApiError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR, "boom"),
    ];

    for (error, expected_status, expected_message) in cases {
        // When
        let (status, body) = render(error).await;

        // Then
        assert_eq!(status, expected_status);
        assert_eq!(body, serde_json::json!({ "error": expected_message }));
    }
}

#[test]
fn given_db_error_when_converted_then_internal_with_generic_message() {
    // Given
    let db_error = DbError::NotFound {
        entity: "user",
        id: "secret@example.com".to_string(),
        location: here(),
    };

    // When
    let api_error = ApiError::from(db_error);

    // Then
    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_that!(api_error.to_string(), not(contains_substring("secret@example.com")));
    assert_that!(api_error.to_string(), contains_substring("Database operation failed"));
}

#[test]
fn given_missing_header_when_converted_then_unauthorized_header_required() {
    let api_error = ApiError::from(AuthError::MissingHeader { location: here() });

    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
    assert_that!(
        api_error.to_string(),
        contains_substring("Authorization header required")
    );
}

#[test]
fn given_expired_token_when_converted_then_unauthorized_invalid_token() {
    let api_error = ApiError::from(AuthError::TokenExpired { location: here() });

    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
    assert_that!(api_error.to_string(), contains_substring("Invalid token"));
}

#[test]
fn given_key_fetch_failure_when_converted_then_internal() {
    let api_error = ApiError::from(AuthError::KeyFetch {
        url: "https://keys.test".to_string(),
        message: "timed out".to_string(),
        location: here(),
    });

    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_media_error_when_converted_then_internal_without_provider_details() {
    let api_error = ApiError::from(MediaError::Rejected {
        status: 401,
        message: "Invalid Signature abc123".to_string(),
        location: here(),
    });

    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_that!(api_error.to_string(), not(contains_substring("abc123")));
}
