//! Extractors that deserialize and validate before the handler runs
//!
//! Handlers take `ValidQuery<R>` / `ValidJson<R>` where `R` is a raw request
//! shape from `crate::models::api`; the handler only ever sees
//! `R::Output`. Malformed input of any kind becomes a 400 `ApiError`.

use crate::core::error::ApiError;
use crate::validation::params::Validate;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

pub struct ValidQuery<R: Validate>(pub R::Output);

pub struct ValidJson<R: Validate>(pub R::Output);

impl<S, R> FromRequestParts<S> for ValidQuery<R>
where
    S: Send + Sync,
    R: Validate + DeserializeOwned + Send,
    R::Output: Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let raw: R = serde_urlencoded::from_str(query).map_err(|e| {
            debug!(error = %e, query = %query, "Rejected query string");
            ApiError::validation("Invalid query string")
        })?;

        raw.validate().map(ValidQuery)
    }
}

impl<S, R> FromRequest<S> for ValidJson<R>
where
    S: Send + Sync,
    R: Validate + DeserializeOwned + Send,
    R::Output: Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<R>::from_request(req, state).await.map_err(|rejection| {
            debug!(error = %rejection.body_text(), "Rejected request body");
            ApiError::validation("Invalid request body")
        })?;

        raw.validate().map(ValidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::{NewSignUpBody, SignUpsQuery};
    use crate::validation::params::SignUpFilter;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    async fn query(uri: &str) -> Result<SignUpFilter, ApiError> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        ValidQuery::<SignUpsQuery>::from_request_parts(&mut parts, &())
            .await
            .map(|ValidQuery(filter)| filter)
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/sign-ups")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_query_parses_and_validates() {
        let filter = query("/sign-ups?uid=3&eid=").await.unwrap();
        assert_eq!(filter, SignUpFilter { uid: 3, eid: 0 });

        let filter = query("/sign-ups").await.unwrap();
        assert_eq!(filter, SignUpFilter { uid: 0, eid: 0 });
    }

    #[tokio::test]
    async fn test_valid_query_rejects_bad_values() {
        let err = query("/sign-ups?eid=abc").await.err().unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_json_accepts_strings_and_numbers() {
        let ValidJson(key) = ValidJson::<NewSignUpBody>::from_request(
            json_request(r#"{"uid": "1", "eid": 2}"#),
            &(),
        )
        .await
        .ok()
        .unwrap();
        assert_eq!((key.uid, key.eid), (1, 2));
    }

    #[tokio::test]
    async fn test_valid_json_rejects_malformed_body() {
        let err = ValidJson::<NewSignUpBody>::from_request(json_request("{not json"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Invalid request body");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_json_rejects_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/sign-ups")
            .body(Body::from(r#"{"uid": 1, "eid": 2}"#))
            .unwrap();
        let result = ValidJson::<NewSignUpBody>::from_request(request, &()).await;
        assert!(result.is_err());
    }
}
