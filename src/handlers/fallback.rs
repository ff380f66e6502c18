use crate::core::error::ApiError;
use axum::{http::Uri, response::IntoResponse, response::Response};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    ApiError::NotFound(format!("No route for {}", uri.path())).into_response()
}
