use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lazy_static::lazy_static;
use serde_json::json;
use tracing::error;

lazy_static! {
    static ref LOG_UNHANDLED_ERRORS: bool = std::env::var("ENABLE_GLOBAL_ERROR_LOGGING")
        .map(|v| v == "true")
        .unwrap_or(false);
}

/// Every handler failure funnels through this type; the `IntoResponse`
/// impl is the single place a failure becomes an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("access denied")]
    AccessDenied,
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::AccessDenied => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Access Denied" })),
            )
                .into_response(),
            ApiError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                if *LOG_UNHANDLED_ERRORS {
                    error!(error = %e, "global error handler");
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": e.to_string(), "error": {} })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_error_list() {
        let err = ApiError::Validation(vec!["first".into(), "second".into()]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"], json!(["first", "second"]));
    }

    #[tokio::test]
    async fn access_denied_maps_to_401_with_generic_message() {
        let response = ApiError::AccessDenied.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Access Denied");
    }

    #[tokio::test]
    async fn forbidden_and_not_found_keep_their_messages() {
        let response = ApiError::Forbidden("You can only edit your own courses!").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["message"], "You can only edit your own courses!");

        let response = ApiError::NotFound("Course Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Course Not Found");
    }

    #[tokio::test]
    async fn internal_maps_to_500_with_empty_error_object() {
        let response = ApiError::from(anyhow::anyhow!("pool timed out")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "pool timed out");
        assert_eq!(body["error"], json!({}));
    }
}
