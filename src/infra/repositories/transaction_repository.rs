//! Transaction repository.
//!
//! Reads join `places` and `users` so every transaction carries the
//! `{ id, name }` of its place and owner.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use super::entities::{
    place,
    transaction::{self, ActiveModel, Entity as TransactionEntity, TransactionRow},
    user,
};
use crate::domain::{Transaction, TransactionInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Transaction repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// List transactions ordered by date, optionally only those of `owner`
    async fn list(&self, owner: Option<i32>) -> AppResult<Vec<Transaction>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Transaction>>;

    /// Insert and return the new id
    async fn create(&self, input: TransactionInput) -> AppResult<i32>;

    /// Returns whether the transaction existed
    async fn update(&self, id: i32, input: TransactionInput) -> AppResult<bool>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed transaction repository
pub struct TransactionStore {
    db: DatabaseConnection,
}

impl TransactionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// `transactions ⋈ places ⋈ users` projected onto [`TransactionRow`].
    fn joined() -> Select<TransactionEntity> {
        TransactionEntity::find()
            .select_only()
            .column(transaction::Column::Id)
            .column(transaction::Column::Amount)
            .column(transaction::Column::Date)
            .column_as(place::Column::Id, "place_id")
            .column_as(place::Column::Name, "place_name")
            .column_as(user::Column::Id, "user_id")
            .column_as(user::Column::Name, "user_name")
            .join(JoinType::InnerJoin, transaction::Relation::Place.def())
            .join(JoinType::InnerJoin, transaction::Relation::User.def())
    }
}

#[async_trait]
impl TransactionRepository for TransactionStore {
    async fn list(&self, owner: Option<i32>) -> AppResult<Vec<Transaction>> {
        tracing::debug!(?owner, "Finding transactions");
        let mut query = Self::joined();
        if let Some(user_id) = owner {
            query = query.filter(transaction::Column::UserId.eq(user_id));
        }

        let rows = query
            .order_by_asc(transaction::Column::Date)
            .into_model::<TransactionRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Transaction>> {
        tracing::debug!(transaction_id = id, "Querying transaction by id");
        let row = Self::joined()
            .filter(transaction::Column::Id.eq(id))
            .into_model::<TransactionRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Transaction::from))
    }

    async fn create(&self, input: TransactionInput) -> AppResult<i32> {
        let active_model = ActiveModel {
            id: NotSet,
            amount: Set(input.amount),
            date: Set(input.date),
            user_id: Set(input.user_id),
            place_id: Set(input.place_id),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, "Error inserting transaction");
            e
        })?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, input: TransactionInput) -> AppResult<bool> {
        let Some(existing) = TransactionEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = existing.into();
        active.amount = Set(input.amount);
        active.date = Set(input.date);
        active.user_id = Set(input.user_id);
        active.place_id = Set(input.place_id);

        active.update(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, transaction_id = id, "Error updating transaction");
            e
        })?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = TransactionEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
