use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bson::oid::ObjectId;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use lantern_db::StoreError;
use lantern_types::cursor::CursorParseError;
use lantern_types::validate::ValidationError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Field rule violation on a candidate post or comment.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing post or comment, or a path id that is not a well-formed
    /// identifier (rejected before any storage round-trip).
    #[error("not found")]
    NotFound,

    /// Malformed query input, e.g. a non-numeric pagination cursor.
    #[error("{0}")]
    BadRequest(String),

    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::Storage(other),
        }
    }
}

impl From<CursorParseError> for ApiError {
    fn from(err: CursorParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(v) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": v.message, "field": v.field, "model": v.model })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "not found" })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Storage(err) => {
                error!("storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

/// Path ids must be well-formed before we touch storage; anything else is
/// indistinguishable from a missing document to the client.
pub fn parse_object_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_carries_field_and_model() {
        let err = ApiError::from(ValidationError::new("title cannot be empty", "title", "post"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "title cannot be empty");
        assert_eq!(body["field"], "title");
        assert_eq!(body["model"], "post");
    }

    #[tokio::test]
    async fn not_found_is_404_with_plain_message() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "not found");
    }

    #[tokio::test]
    async fn bad_cursor_is_400_with_contract_message() {
        let err = ApiError::from(CursorParseError);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "after should be a string convertable to int64"
        );
    }

    #[tokio::test]
    async fn store_not_found_maps_to_404() {
        let response = ApiError::from(StoreError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_id_is_rejected_without_storage() {
        assert!(matches!(parse_object_id("nope"), Err(ApiError::NotFound)));
        assert!(parse_object_id("65a8e27d8a9f4e2b9c3d1f00").is_ok());
    }
}
