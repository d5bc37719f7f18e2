use crate::error::{AppError, Result};
use crate::model::ShortenUrlRequest;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::ShortenedUrl;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

pub async fn shorten_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: std::result::Result<Json<ShortenUrlRequest>, JsonRejection>,
) -> Result<Json<ShortenedUrl>> {
    let Json(request) = request?;
    let host_domain = host_domain(&state, &headers)?;
    let shortened = state
        .shortener()
        .shorten(&request.original_url, &host_domain)?;

    Ok(Json(shortened))
}

pub async fn resolve_url_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let original_url = state.shortener().resolve(&short_id)?;
    let location = HeaderValue::try_from(redirect_target(&original_url))
        .map_err(|_| AppError::InvalidRedirect { short_id })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `{scheme}://{host}` of the inbound request, unless a public base url is
/// configured.
fn host_domain(state: &AppState, headers: &HeaderMap) -> Result<String> {
    if let Some(base_url) = state.public_base_url() {
        return Ok(base_url.to_owned());
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MissingHost)?;
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}

/// Scheme-less urls are stored as given; browsers would treat them as
/// relative, so the redirect assumes http.
fn redirect_target(original_url: &str) -> String {
    if original_url.starts_with("http://") || original_url.starts_with("https://") {
        original_url.to_owned()
    } else {
        format!("http://{original_url}")
    }
}
