use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::ShortenerError;
use tracing::{debug, error, warn};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Shortener(ShortenerError),
    /// The request body is not a `ShortenUrlRequest`.
    InvalidBody(JsonRejection),
    /// Neither a `Host` header nor a configured public base url.
    MissingHost,
    /// The stored url cannot be sent as a `Location` header.
    InvalidRedirect { short_id: String },
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        Self::Shortener(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Shortener(ShortenerError::InvalidUrl(message)) => {
                debug!(%message, "rejected url");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Shortener(ShortenerError::NotFound(short_id)) => {
                debug!(%short_id, "short id not found");
                (
                    StatusCode::NOT_FOUND,
                    "Shortened URL not found.".to_string(),
                )
            }
            AppError::Shortener(err @ ShortenerError::Conflict(_)) => {
                warn!(error = %err, "short id conflict reached the client");
                (StatusCode::CONFLICT, format!("{err}. Try again."))
            }
            AppError::Shortener(err @ ShortenerError::Storage(_)) => {
                error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            AppError::InvalidBody(rejection) => {
                let message = rejection.body_text();
                debug!(%message, "rejected request body");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::MissingHost => (
                StatusCode::BAD_REQUEST,
                "Host header is required".to_string(),
            ),
            AppError::InvalidRedirect { short_id } => {
                error!(%short_id, "stored url is not a valid location header");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Stored URL cannot be redirected to.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
