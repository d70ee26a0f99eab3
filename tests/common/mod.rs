//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use budget_api::config::Config;
use budget_api::domain::{CurrentUser, NamedRef, Place, Transaction, User, UserRole};
use budget_api::infra::repositories::{
    MockPlaceRepository, MockTransactionRepository, MockUserRepository,
};
use budget_api::infra::{PlaceRepository, TransactionRepository, UnitOfWork, UserRepository};

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Unit of Work over repository mocks. A mock without expectations panics
/// when called, so tests only set up what they expect to be touched.
pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    places: Arc<MockPlaceRepository>,
    transactions: Arc<MockTransactionRepository>,
}

impl TestUnitOfWork {
    pub fn new(
        users: MockUserRepository,
        places: MockPlaceRepository,
        transactions: MockTransactionRepository,
    ) -> Self {
        Self {
            users: Arc::new(users),
            places: Arc::new(places),
            transactions: Arc::new(transactions),
        }
    }

    pub fn with_users(users: MockUserRepository) -> Self {
        Self::new(users, MockPlaceRepository::new(), MockTransactionRepository::new())
    }

    pub fn with_places(places: MockPlaceRepository) -> Self {
        Self::new(MockUserRepository::new(), places, MockTransactionRepository::new())
    }

    pub fn empty() -> Self {
        Self::new(
            MockUserRepository::new(),
            MockPlaceRepository::new(),
            MockTransactionRepository::new(),
        )
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn places(&self) -> Arc<dyn PlaceRepository> {
        self.places.clone()
    }

    fn transactions(&self) -> Arc<dyn TransactionRepository> {
        self.transactions.clone()
    }
}

pub fn test_config() -> Config {
    Config::with_secret(TEST_SECRET)
}

pub fn user(id: i32, role: UserRole) -> User {
    User {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        password_hash: "hashed".to_string(),
        role,
    }
}

pub fn caller(id: i32, role: UserRole) -> CurrentUser {
    CurrentUser {
        id,
        email: format!("user{}@example.com", id),
        role,
    }
}

pub fn place(id: i32, name: &str) -> Place {
    Place {
        id,
        name: name.to_string(),
        rating: 4,
    }
}

pub fn transaction(id: i32, owner: i32, place_id: i32) -> Transaction {
    Transaction {
        id,
        amount: -220,
        date: Utc.with_ymd_and_hms(2021, 5, 8, 20, 0, 0).unwrap(),
        user: NamedRef {
            id: owner,
            name: format!("User {}", owner),
        },
        place: NamedRef {
            id: place_id,
            name: "Dranken Geers".to_string(),
        },
    }
}
