use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{Swatch, SwatchRole};
use crate::server::AppState;

/// Request body for dominant color extraction
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    /// URL of the image to analyze
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
}

/// Response carrying the extracted dominant color
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorResponse {
    /// Hex color of the image's Vibrant swatch, e.g. "#a1b2c3"
    #[serde(rename = "dominantColor")]
    pub dominant_color: String,
}

/// Extract the dominant color of a remote image
///
/// Fetches the image at `photoUrl`, runs palette extraction, and returns the
/// Vibrant swatch as a hex string.
#[utoipa::path(
    post,
    path = "/dominant-color",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "Dominant color extracted", body = ColorResponse),
        (status = 400, description = "Missing photoUrl in request body"),
        (status = 500, description = "Fetch or extraction failure"),
    ),
    tag = "Color"
)]
pub async fn handle_dominant_color(
    State(state): State<AppState>,
    payload: Option<Json<ColorRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    // Absent body, absent field, null, and empty string all count as missing.
    let photo_url = payload
        .and_then(|Json(request)| request.photo_url)
        .filter(|url| !url.trim().is_empty())
        .ok_or(ApiError::MissingPhotoUrl)?;

    tracing::debug!(url = %photo_url, "Fetching image");
    let bytes = state.fetcher.fetch(&photo_url).await?;

    let palette = state.extractor.extract(&bytes)?;

    // Absence of a Vibrant swatch is detected explicitly so it keeps its own
    // error message, distinct from fetch/decode failures.
    let dominant_color = palette
        .get(SwatchRole::Vibrant)
        .and_then(Swatch::hex)
        .ok_or(ApiError::NoVibrantSwatch)?;

    tracing::info!(url = %photo_url, color = %dominant_color, "Extracted dominant color");

    Ok(Json(ColorResponse { dominant_color }))
}
