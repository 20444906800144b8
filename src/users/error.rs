use std::fmt;

use thiserror::Error;

use crate::database::StoreError;

/// 查找用户时使用的键
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(i64),
    Username(String),
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Id(id) => write!(f, "User with id {} not found", id),
            UserKey::Username(username) => write!(f, "User {} not found", username),
        }
    }
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username cannot be blank")]
    BlankUsername,

    #[error("Name cannot be blank")]
    BlankName,

    #[error("Phone cannot be blank")]
    BlankPhone,

    #[error("Duplicate data")]
    Duplicate,

    #[error("{0}")]
    NotFound(UserKey),

    #[error("Storage failure: {0}")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => UserError::Duplicate,
            other => UserError::Storage(other),
        }
    }
}
