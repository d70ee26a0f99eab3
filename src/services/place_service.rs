//! Place service.

use async_trait::async_trait;
use std::sync::Arc;

use super::db_error::map_db_error;
use crate::domain::{Place, PlaceInput};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::ListResponse;

#[async_trait]
pub trait PlaceService: Send + Sync {
    /// All places, ordered by name
    async fn list_places(&self) -> AppResult<ListResponse<Place>>;

    async fn get_place(&self, id: i32) -> AppResult<Place>;

    async fn create_place(&self, input: PlaceInput) -> AppResult<Place>;

    async fn update_place(&self, id: i32, input: PlaceInput) -> AppResult<Place>;

    async fn delete_place(&self, id: i32) -> AppResult<()>;
}

fn place_not_found(id: i32) -> AppError {
    AppError::not_found_id(format!("No place with id {} exists", id), id)
}

pub struct PlaceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PlaceManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PlaceService for PlaceManager<U> {
    async fn list_places(&self) -> AppResult<ListResponse<Place>> {
        let places = self.uow.places().list().await?;
        Ok(ListResponse::new(places))
    }

    async fn get_place(&self, id: i32) -> AppResult<Place> {
        self.uow
            .places()
            .find_by_id(id)
            .await?
            .ok_or_else(|| place_not_found(id))
    }

    async fn create_place(&self, input: PlaceInput) -> AppResult<Place> {
        let place = self
            .uow
            .places()
            .create(input)
            .await
            .map_err(map_db_error)?;

        tracing::info!(place_id = place.id, "Place created");
        Ok(place)
    }

    async fn update_place(&self, id: i32, input: PlaceInput) -> AppResult<Place> {
        self.uow
            .places()
            .update(id, input)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| place_not_found(id))
    }

    async fn delete_place(&self, id: i32) -> AppResult<()> {
        if !self.uow.places().delete(id).await? {
            return Err(place_not_found(id));
        }
        tracing::info!(place_id = id, "Place deleted");
        Ok(())
    }
}
