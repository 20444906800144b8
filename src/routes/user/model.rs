use serde::{Deserialize, Serialize};

use crate::users::{Paging, User};

pub use crate::users::UserPatch as UpdateUserRequest;

/// 缺失的字段按空字符串处理，交给校验逻辑报错
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub data: Vec<User>,
    pub paging: Paging,
}
