use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::users::UserError;

/// 处理函数边界上的错误，统一渲染为 400 + `{"error": ...}`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MalformedInput(String),

    #[error(transparent)]
    User(#[from] UserError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::User(UserError::Storage(e)) = &self {
            tracing::error!("Storage error: {}", e);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::users::UserKey;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let (status, body) = render(UserError::BlankName.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name cannot be blank");
    }

    #[tokio::test]
    async fn not_found_is_bad_request() {
        let (status, body) = render(UserError::NotFound(UserKey::Id(3)).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User with id 3 not found");
    }

    #[tokio::test]
    async fn malformed_input_keeps_message() {
        let (_, body) = render(AppError::MalformedInput("invalid user id: abc".into())).await;
        assert_eq!(body["error"], "invalid user id: abc");
    }
}
