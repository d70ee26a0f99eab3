//! Transaction database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

use crate::domain::{NamedRef, Transaction};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub amount: i32,
    pub date: DateTimeUtc,
    pub user_id: i32,
    pub place_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::place::Entity",
        from = "Column::PlaceId",
        to = "super::place::Column::Id",
        on_delete = "Cascade"
    )]
    Place,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Place.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Row of `transactions` joined with its place and user names.
#[derive(Debug, FromQueryResult)]
pub struct TransactionRow {
    pub id: i32,
    pub amount: i32,
    pub date: DateTimeUtc,
    pub place_id: i32,
    pub place_name: String,
    pub user_id: i32,
    pub user_name: String,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Transaction {
            id: row.id,
            amount: row.amount,
            date: row.date,
            user: NamedRef {
                id: row.user_id,
                name: row.user_name,
            },
            place: NamedRef {
                id: row.place_id,
                name: row.place_name,
            },
        }
    }
}
