// 数据库模块
// 存储接口定义以及 Postgres / 内存两种实现

#[cfg(test)]
pub(crate) mod flaky;
pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryUserStore;
pub use models::user::{NewUser, User};
pub use postgres::PgUserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    UniqueViolation,

    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::UniqueViolation,
            _ => StoreError::Sqlx(err),
        }
    }
}

/// users 表的存取接口，每个方法只涉及单行或一次查询
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn insert(&self, user: &NewUser) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// 按 id 倒序返回，跳过 offset 行，最多 limit 行
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError>;

    /// 返回是否有行被更新
    async fn update(&self, user: &User) -> Result<bool, StoreError>;

    /// 返回是否有行被删除
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
