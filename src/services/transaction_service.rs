//! Transaction service.
//!
//! Every operation is scoped to the caller: regular users only ever see
//! their own transactions, admins see all of them. A transaction outside
//! the caller's scope is reported as missing rather than forbidden.

use async_trait::async_trait;
use std::sync::Arc;

use super::db_error::map_db_error;
use crate::domain::{CurrentUser, Transaction, TransactionDraft};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::ListResponse;

#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Visible transactions, ordered by date
    async fn list_transactions(&self, caller: &CurrentUser) -> AppResult<ListResponse<Transaction>>;

    async fn get_transaction(&self, caller: &CurrentUser, id: i32) -> AppResult<Transaction>;

    /// Record a transaction owned by the caller
    async fn create_transaction(
        &self,
        caller: &CurrentUser,
        draft: TransactionDraft,
    ) -> AppResult<Transaction>;

    /// Overwrite a visible transaction; ownership moves to the caller
    async fn update_transaction(
        &self,
        caller: &CurrentUser,
        id: i32,
        draft: TransactionDraft,
    ) -> AppResult<Transaction>;

    async fn delete_transaction(&self, caller: &CurrentUser, id: i32) -> AppResult<()>;
}

fn transaction_not_found(id: i32) -> AppError {
    AppError::not_found_id(format!("No transaction with id {} exists", id), id)
}

pub struct TransactionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TransactionManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load a transaction the caller may see.
    async fn find_visible(&self, caller: &CurrentUser, id: i32) -> AppResult<Transaction> {
        match self.uow.transactions().find_by_id(id).await? {
            Some(transaction) if caller.can_access_user(transaction.owner_id()) => Ok(transaction),
            Some(_) => {
                tracing::debug!(transaction_id = id, user_id = caller.id, "Transaction hidden from caller");
                Err(transaction_not_found(id))
            }
            None => Err(transaction_not_found(id)),
        }
    }

    async fn ensure_place_exists(&self, place_id: i32) -> AppResult<()> {
        if self.uow.places().find_by_id(place_id).await?.is_none() {
            return Err(AppError::not_found_id(
                format!("There is no place with id {}", place_id),
                place_id,
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> TransactionService for TransactionManager<U> {
    async fn list_transactions(&self, caller: &CurrentUser) -> AppResult<ListResponse<Transaction>> {
        let owner = (!caller.is_admin()).then_some(caller.id);
        let transactions = self.uow.transactions().list(owner).await?;
        Ok(ListResponse::new(transactions))
    }

    async fn get_transaction(&self, caller: &CurrentUser, id: i32) -> AppResult<Transaction> {
        self.find_visible(caller, id).await
    }

    async fn create_transaction(
        &self,
        caller: &CurrentUser,
        draft: TransactionDraft,
    ) -> AppResult<Transaction> {
        self.ensure_place_exists(draft.place_id).await?;

        let id = self
            .uow
            .transactions()
            .create(draft.owned_by(caller.id))
            .await
            .map_err(map_db_error)?;

        tracing::info!(transaction_id = id, user_id = caller.id, "Transaction created");
        self.find_visible(caller, id).await
    }

    async fn update_transaction(
        &self,
        caller: &CurrentUser,
        id: i32,
        draft: TransactionDraft,
    ) -> AppResult<Transaction> {
        self.find_visible(caller, id).await?;
        self.ensure_place_exists(draft.place_id).await?;

        let updated = self
            .uow
            .transactions()
            .update(id, draft.owned_by(caller.id))
            .await
            .map_err(map_db_error)?;
        if !updated {
            return Err(transaction_not_found(id));
        }

        self.find_visible(caller, id).await
    }

    async fn delete_transaction(&self, caller: &CurrentUser, id: i32) -> AppResult<()> {
        self.find_visible(caller, id).await?;

        if !self.uow.transactions().delete(id).await? {
            return Err(transaction_not_found(id));
        }
        tracing::info!(transaction_id = id, user_id = caller.id, "Transaction deleted");
        Ok(())
    }
}
