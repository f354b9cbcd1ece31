//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::generate_code;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:5000/aB3xY9" }
/// ```
///
/// The URL is stored as-is, with no format check and no deduplication:
/// shortening the same URL twice produces two independent codes. Codes are
/// drawn without a collision check; a colliding code overwrites the previous
/// entry (last write wins).
///
/// # Errors
///
/// A malformed body (missing `url`, invalid JSON) is rejected by the `Json`
/// extractor with a 4xx response before this handler runs.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let code = generate_code(state.code_length);

    state.urls.insert(&code, &payload.url).await?;

    tracing::debug!("Shortened URL to code {code}");

    let short_url = format!("{}/{}", state.base_url, code);

    Ok(Json(ShortenResponse { short_url }))
}
