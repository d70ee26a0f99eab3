//! Place repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::place::{self, ActiveModel, Entity as PlaceEntity};
use crate::domain::{Place, PlaceInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Place repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// List all places ordered by name
    async fn list(&self) -> AppResult<Vec<Place>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Place>>;

    async fn create(&self, place: PlaceInput) -> AppResult<Place>;

    /// `None` when the place does not exist
    async fn update(&self, id: i32, place: PlaceInput) -> AppResult<Option<Place>>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed place repository
pub struct PlaceStore {
    db: DatabaseConnection,
}

impl PlaceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlaceRepository for PlaceStore {
    async fn list(&self) -> AppResult<Vec<Place>> {
        tracing::debug!("Finding all places");
        let models = PlaceEntity::find()
            .order_by_asc(place::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Place::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Place>> {
        tracing::debug!(place_id = id, "Querying place by id");
        let result = PlaceEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Place::from))
    }

    async fn create(&self, input: PlaceInput) -> AppResult<Place> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            rating: Set(input.rating),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, "Error inserting place");
            e
        })?;
        Ok(Place::from(model))
    }

    async fn update(&self, id: i32, input: PlaceInput) -> AppResult<Option<Place>> {
        let Some(existing) = PlaceEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.rating = Set(input.rating);

        let model = active.update(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, place_id = id, "Error updating place");
            e
        })?;
        Ok(Some(Place::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = PlaceEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
