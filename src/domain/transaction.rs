//! Transaction: a signed amount tied to a user and a place on a date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to a related record, embedded in transaction payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NamedRef {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Loon")]
    pub name: String,
}

/// Transaction as read back from the store, joined with its user and place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    #[schema(example = 1)]
    pub id: i32,
    /// Positive for income, negative for expenses
    #[schema(example = 3500)]
    pub amount: i32,
    pub date: DateTime<Utc>,
    pub user: NamedRef,
    pub place: NamedRef,
}

impl Transaction {
    pub fn owner_id(&self) -> i32 {
        self.user.id
    }
}

/// Fields written for a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub amount: i32,
    pub date: DateTime<Utc>,
    pub place_id: i32,
    pub user_id: i32,
}

/// Transaction fields supplied by a caller; the owner is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: i32,
    pub date: DateTime<Utc>,
    pub place_id: i32,
}

impl TransactionDraft {
    pub fn owned_by(self, user_id: i32) -> TransactionInput {
        TransactionInput {
            amount: self.amount,
            date: self.date,
            place_id: self.place_id,
            user_id,
        }
    }
}
