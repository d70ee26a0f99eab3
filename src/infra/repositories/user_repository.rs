//! User repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, UpdateUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by name
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite name and email; `None` when the user does not exist
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<Option<User>>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed user repository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        tracing::debug!("Finding all users");
        let models = UserEntity::find()
            .order_by_asc(user::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            role: Set(new_user.role.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, "Error inserting user");
            e
        })?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.email = Set(changes.email);

        let model = active.update(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, user_id = id, "Error updating user");
            e
        })?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
