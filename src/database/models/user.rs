use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// users 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub phone: String,
}

/// 待插入的用户，字段已去除首尾空白并校验非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub phone: String,
}
