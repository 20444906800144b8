use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;

use super::{MemoryUserStore, NewUser, StoreError, User, UserStore};

/// 可切换故障的内存存储，用于模拟连接池超时
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum FailMode {
    Off = 0,
    Writes = 1,
    All = 2,
}

#[derive(Default)]
pub(crate) struct FlakyUserStore {
    inner: MemoryUserStore,
    mode: AtomicU8,
}

impl FlakyUserStore {
    pub(crate) fn set_mode(&self, mode: FailMode) {
        self.mode.store(mode as u8, Ordering::SeqCst);
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.mode.load(Ordering::SeqCst) == FailMode::All as u8 {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.mode.load(Ordering::SeqCst) != FailMode::Off as u8 {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for FlakyUserStore {
    async fn insert(&self, user: &NewUser) -> Result<User, StoreError> {
        self.check_write()?;
        self.inner.insert(user).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.check_read()?;
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.check_read()?;
        self.inner.find_by_username(username).await
    }

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        self.check_read()?;
        self.inner.username_exists(username).await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.check_read()?;
        self.inner.count().await
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError> {
        self.check_read()?;
        self.inner.list(offset, limit).await
    }

    async fn update(&self, user: &User) -> Result<bool, StoreError> {
        self.check_write()?;
        self.inner.update(user).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.check_write()?;
        self.inner.delete(id).await
    }
}
