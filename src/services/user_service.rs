//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use super::db_error::map_db_error;
use crate::domain::{UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::ListResponse;

/// User service trait for dependency injection.
///
/// Access control (self or admin) is enforced by the HTTP layer.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<ListResponse<User>>;

    async fn get_user(&self, id: i32) -> AppResult<User>;

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

fn user_not_found(id: i32) -> AppError {
    AppError::not_found_id(format!("No user with id {} exists", id), id)
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<ListResponse<User>> {
        let users = self.uow.users().list().await?;
        Ok(ListResponse::new(users))
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        self.uow
            .users()
            .update(id, changes)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.uow.users().delete(id).await? {
            return Err(user_not_found(id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
