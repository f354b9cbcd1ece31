//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL on hit
/// - **404 Not Found** with plain-text body `URL Not Found` on miss
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state
        .urls
        .find_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("URL Not Found", json!({ "code": code })))?;

    tracing::debug!("Redirecting {code} to stored URL");

    // The stored URL is unvalidated, so it may not be a legal header value.
    let location = HeaderValue::from_str(&long_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
