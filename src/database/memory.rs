use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NewUser, StoreError, User, UserStore};

/// 进程内存储，重启即丢失；用于本地调试和测试
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl Inner {
    fn username_taken(&self, username: &str, except_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|u| u.username == username && Some(u.id) != except_id)
    }
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.username_taken(&user.username, None) {
            return Err(StoreError::UniqueViolation);
        }

        inner.last_id += 1;
        let row = User {
            id: inner.last_id,
            username: user.username.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().find(|u| u.username == username).cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.username_taken(username, None))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.rows.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .rev()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&user.id) {
            return Ok(false);
        }
        if inner.username_taken(&user.username, Some(user.id)) {
            return Err(StoreError::UniqueViolation);
        }

        inner.rows.insert(user.id, user.clone());
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.into(),
            name: format!("{} name", username),
            phone: "12345".into(),
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryUserStore::new();
        let a = store.insert(&new_user("a")).await.unwrap();
        let b = store.insert(&new_user("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryUserStore::new();
        let a = store.insert(&new_user("a")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert(&new_user("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.insert(&new_user("alice")).await.unwrap();
        let err = store.insert(&new_user("alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first_with_offset_and_limit() {
        let store = MemoryUserStore::new();
        for name in ["a", "b", "c", "d"] {
            store.insert(&new_user(name)).await.unwrap();
        }

        let page: Vec<_> = store
            .list(1, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(page, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn update_checks_username_owner() {
        let store = MemoryUserStore::new();
        store.insert(&new_user("a")).await.unwrap();
        let mut b = store.insert(&new_user("b")).await.unwrap();

        b.username = "a".into();
        assert!(matches!(
            store.update(&b).await.unwrap_err(),
            StoreError::UniqueViolation
        ));

        b.username = "b".into();
        b.phone = "999".into();
        assert!(store.update(&b).await.unwrap());
        assert_eq!(store.find_by_id(b.id).await.unwrap().unwrap().phone, "999");

        b.id = 42;
        assert!(!store.update(&b).await.unwrap());
    }
}
