//! Development seed data.
//!
//! Wipes the three tables and inserts a small fixture set: an admin and two
//! regular users (password `12345678`), three places and three transactions
//! per user.

use chrono::{TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set,
    TransactionTrait,
};

use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::{place, transaction, user};

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "12345678";

const USERS: &[(&str, &str, &str)] = &[
    ("Thomas Aelbrecht", "thomas.aelbrecht@hogent.be", ROLE_ADMIN),
    ("Pieter Van Der Helst", "pieter.vanderhelst@hogent.be", ROLE_USER),
    ("Karine Samyn", "karine.samyn@hogent.be", ROLE_USER),
];

const PLACES: &[(&str, i32)] = &[("Loon", 5), ("Dranken Geers", 3), ("Irish Pub", 4)];

/// (owner index, place index, amount, y, m, d, h, min)
const TRANSACTIONS: &[(usize, usize, i32, i32, u32, u32, u32, u32)] = &[
    (0, 0, 3500, 2021, 5, 25, 19, 40),
    (0, 1, -220, 2021, 5, 8, 20, 0),
    (0, 2, -74, 2021, 5, 21, 14, 30),
    (1, 0, 4000, 2021, 5, 25, 19, 40),
    (1, 1, -220, 2021, 5, 9, 23, 0),
    (1, 2, -74, 2021, 5, 22, 12, 0),
    (2, 0, 4000, 2021, 5, 25, 19, 40),
    (2, 1, -220, 2021, 5, 10, 10, 0),
    (2, 2, -74, 2021, 5, 19, 11, 30),
];

/// Summary of inserted rows
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub places: usize,
    pub transactions: usize,
}

/// Replace all data with the fixture set, atomically.
pub async fn run(db: &DatabaseConnection) -> AppResult<SeedReport> {
    let password_hash = Password::new(SEED_PASSWORD)?.into_string();
    let txn = db.begin().await?;

    transaction::Entity::delete_many().exec(&txn).await?;
    place::Entity::delete_many().exec(&txn).await?;
    user::Entity::delete_many().exec(&txn).await?;

    let mut user_ids = Vec::with_capacity(USERS.len());
    for (name, email, role) in USERS {
        let model = user::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.clone()),
            role: Set(role.to_string()),
        }
        .insert(&txn)
        .await?;
        user_ids.push(model.id);
    }

    let mut place_ids = Vec::with_capacity(PLACES.len());
    for (name, rating) in PLACES {
        let model = place::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            rating: Set(*rating),
        }
        .insert(&txn)
        .await?;
        place_ids.push(model.id);
    }

    for &(owner, place, amount, y, m, d, h, min) in TRANSACTIONS {
        let date = Utc
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .ok_or_else(|| AppError::internal("Invalid seed date"))?;
        transaction::ActiveModel {
            id: NotSet,
            amount: Set(amount),
            date: Set(date),
            user_id: Set(user_ids[owner]),
            place_id: Set(place_ids[place]),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(SeedReport {
        users: user_ids.len(),
        places: place_ids.len(),
        transactions: TRANSACTIONS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_user_owns_transactions() {
        for owner in 0..USERS.len() {
            let owned = TRANSACTIONS.iter().filter(|t| t.0 == owner).count();
            assert_eq!(owned, 3, "user {} should own three transactions", owner);
        }
    }

    #[test]
    fn test_fixture_references_are_in_range() {
        for &(owner, place, amount, y, m, d, h, min) in TRANSACTIONS {
            assert!(owner < USERS.len());
            assert!(place < PLACES.len());
            assert_ne!(amount, 0);
            assert!(Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().is_some());
        }
    }
}
