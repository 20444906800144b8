use std::sync::Arc;

use crate::database::UserStore;

use super::{Paging, User, UserError, UserKey, UserPatch, new_user};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    max_page_limit: i64,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, max_page_limit: i64) -> Self {
        Self {
            store,
            max_page_limit,
        }
    }

    pub async fn create(&self, username: &str, name: &str, phone: &str) -> Result<User, UserError> {
        let new_user = new_user(username, name, phone)?;

        // 快速拒绝；并发情况下以存储层唯一约束为准
        if self.store.username_exists(&new_user.username).await? {
            return Err(UserError::Duplicate);
        }

        let user = self.store.insert(&new_user).await?;
        tracing::info!("Created user {} with id {}", user.username, user.id);
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, UserError> {
        tracing::debug!("Looking up user by id {}", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(UserKey::Id(id)))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, UserError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserError::BlankUsername);
        }

        tracing::debug!("Looking up user by username {}", username);
        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(UserKey::Username(username.to_string())))
    }

    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<(Vec<User>, Paging), UserError> {
        let mut paging = Paging::new(page, limit, self.max_page_limit);
        paging.total = self.store.count().await?;
        let users = self.store.list(paging.offset(), paging.limit).await?;
        Ok((users, paging))
    }

    /// 校验请求中提供的字段后合并到已有记录
    pub async fn update_by_id(&self, id: i64, patch: UserPatch) -> Result<User, UserError> {
        let patch = patch.validate()?;
        let mut user = self.get_by_id(id).await?;

        if let Some(username) = patch.username.as_deref() {
            if username != user.username && self.store.username_exists(username).await? {
                return Err(UserError::Duplicate);
            }
        }

        patch.apply(&mut user);
        self.save(user).await
    }

    /// 按用户名覆盖 name 和 phone
    pub async fn update_by_username(
        &self,
        username: &str,
        name: &str,
        phone: &str,
    ) -> Result<User, UserError> {
        let input = new_user(username, name, phone)?;
        let mut user = self.get_by_username(&input.username).await?;

        user.name = input.name;
        user.phone = input.phone;
        self.save(user).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<User, UserError> {
        let user = self.get_by_id(id).await?;
        self.remove(user).await
    }

    pub async fn delete_by_username(&self, username: &str) -> Result<User, UserError> {
        let user = self.get_by_username(username).await?;
        self.remove(user).await
    }

    async fn save(&self, user: User) -> Result<User, UserError> {
        if !self.store.update(&user).await? {
            return Err(UserError::NotFound(UserKey::Id(user.id)));
        }
        tracing::info!("Updated user {} ({})", user.id, user.username);
        Ok(user)
    }

    async fn remove(&self, user: User) -> Result<User, UserError> {
        if !self.store.delete(user.id).await? {
            return Err(UserError::NotFound(UserKey::Id(user.id)));
        }
        tracing::info!("Deleted user {} ({})", user.id, user.username);
        Ok(user)
    }
}
