use axum::{
    Json,
    extract::{Path, Query, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::AppError,
    routes::extractors::JsonOrForm,
    users::User,
    utils::{DataResponse, data_response},
};

use super::model::{CreateUserRequest, ListUsersQuery, ListUsersResponse, UpdateUserRequest};

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::MalformedInput(format!("invalid user id: {}", raw)))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> Result<Json<DataResponse<i64>>, AppError> {
    let user = state
        .users
        .create(&req.username, &req.name, &req.phone)
        .await?;

    Ok(data_response(user.id))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListUsersQuery>, AppError>,
) -> Result<Json<ListUsersResponse>, AppError> {
    let (users, paging) = state.users.list(query.page, query.limit).await?;

    Ok(Json(ListUsersResponse {
        data: users,
        paging,
    }))
}

#[axum::debug_handler]
pub async fn read_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<User>>, AppError> {
    let id = parse_id(&id)?;
    let user = state.users.get_by_id(id).await?;

    Ok(data_response(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(req): JsonOrForm<UpdateUserRequest>,
) -> Result<Json<DataResponse<bool>>, AppError> {
    let id = parse_id(&id)?;
    state.users.update_by_id(id, req).await?;

    Ok(data_response(true))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<bool>>, AppError> {
    let id = parse_id(&id)?;
    state.users.delete_by_id(id).await?;

    Ok(data_response(true))
}
