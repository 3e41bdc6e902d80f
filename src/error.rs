use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced at the endpoint boundary.
///
/// Each variant maps to a fixed user-visible message; fetch and extraction
/// failures are collapsed into one generic message so internal detail never
/// reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please provide a photoUrl in the request body")]
    MissingPhotoUrl,

    #[error("Could not extract a dominant color from the image.")]
    NoVibrantSwatch,

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image contains no pixels")]
    EmptyImage,
}

impl ApiError {
    /// The message the client sees. Processing failures all render the same
    /// generic text; the real cause is only logged server-side.
    fn client_message(&self) -> String {
        match self {
            ApiError::MissingPhotoUrl | ApiError::NoVibrantSwatch => self.to_string(),
            ApiError::Fetch(_) | ApiError::Extract(_) => {
                "Error processing the image.".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingPhotoUrl => StatusCode::BAD_REQUEST,
            ApiError::NoVibrantSwatch => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Fetch(_) | ApiError::Extract(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::Fetch(e) => tracing::error!(error = %e, "Error processing the image"),
            ApiError::Extract(e) => tracing::error!(error = %e, "Error processing the image"),
            ApiError::NoVibrantSwatch => {
                tracing::warn!("Extraction produced no usable Vibrant swatch")
            }
            ApiError::MissingPhotoUrl => {}
        }

        let body = Json(json!({
            "error": self.client_message(),
        }));

        (status, body).into_response()
    }
}
