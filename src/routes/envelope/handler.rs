use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::AppError,
    users::{User, UserError},
    utils::response_codes,
};

use super::model::{EnvelopeRequest, EnvelopeResponse};

type EnvelopeReply = (StatusCode, Json<EnvelopeResponse>);

fn success(req: &EnvelopeRequest, message: &str, user: Option<User>) -> EnvelopeReply {
    (
        StatusCode::OK,
        Json(EnvelopeResponse::success(req, message, user)),
    )
}

fn failure(req: &EnvelopeRequest, code: &str, err: UserError) -> EnvelopeReply {
    if let UserError::Storage(e) = &err {
        tracing::error!("Storage error (response code {}): {}", code, e);
    }

    (
        StatusCode::BAD_REQUEST,
        Json(EnvelopeResponse::failure(req, code, err.to_string())),
    )
}

fn blank_field_code(err: &UserError) -> Option<&'static str> {
    match err {
        UserError::BlankUsername => Some(response_codes::BLANK_USERNAME),
        UserError::BlankName => Some(response_codes::BLANK_NAME),
        UserError::BlankPhone => Some(response_codes::BLANK_PHONE),
        _ => None,
    }
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EnvelopeRequest>, AppError>,
) -> EnvelopeReply {
    let data = &req.data;
    match state
        .users
        .create(&data.username, &data.name, &data.phone)
        .await
    {
        Ok(user) => success(&req, "Create user successfully", Some(user)),
        Err(err) => {
            let code = match &err {
                UserError::Duplicate => response_codes::DUPLICATE,
                other => blank_field_code(other).unwrap_or(response_codes::INSERT_FAILED),
            };
            failure(&req, code, err)
        }
    }
}

#[axum::debug_handler]
pub async fn search_user(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EnvelopeRequest>, AppError>,
) -> EnvelopeReply {
    match state.users.get_by_username(&req.data.username).await {
        Ok(user) => success(&req, "Search user successfully", Some(user)),
        Err(err) => {
            let code = match &err {
                UserError::NotFound(_) => response_codes::SEARCH_NOT_FOUND,
                other => blank_field_code(other).unwrap_or(response_codes::SEARCH_FAILED),
            };
            failure(&req, code, err)
        }
    }
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EnvelopeRequest>, AppError>,
) -> EnvelopeReply {
    let data = &req.data;
    match state
        .users
        .update_by_username(&data.username, &data.name, &data.phone)
        .await
    {
        Ok(user) => success(&req, "Update user successfully", Some(user)),
        Err(err) => {
            let code = match &err {
                UserError::NotFound(_) => response_codes::UPDATE_NOT_FOUND,
                other => blank_field_code(other).unwrap_or(response_codes::WRITE_FAILED),
            };
            failure(&req, code, err)
        }
    }
}

/// 用户不存在时返回普通的 `{"error": ...}`，不使用信封
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EnvelopeRequest>, AppError>,
) -> Result<EnvelopeReply, AppError> {
    match state.users.delete_by_username(&req.data.username).await {
        Ok(_) => Ok(success(&req, "Delete user successfully", None)),
        Err(err @ UserError::NotFound(_)) => Err(err.into()),
        Err(err) => {
            let code = blank_field_code(&err).unwrap_or(response_codes::WRITE_FAILED);
            Ok(failure(&req, code, err))
        }
    }
}
