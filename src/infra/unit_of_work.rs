//! Unit of Work: one place to obtain every repository.
//!
//! Services are generic over [`UnitOfWork`], so the production
//! [`Persistence`] and test doubles built from repository mocks are
//! interchangeable.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    PlaceRepository, PlaceStore, TransactionRepository, TransactionStore, UserRepository,
    UserStore,
};

/// Centralized repository access for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn places(&self) -> Arc<dyn PlaceRepository>;

    fn transactions(&self) -> Arc<dyn TransactionRepository>;
}

/// Concrete implementation of UnitOfWork over a pooled connection
pub struct Persistence {
    user_repo: Arc<UserStore>,
    place_repo: Arc<PlaceStore>,
    transaction_repo: Arc<TransactionStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            place_repo: Arc::new(PlaceStore::new(db.clone())),
            transaction_repo: Arc::new(TransactionStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn places(&self) -> Arc<dyn PlaceRepository> {
        self.place_repo.clone()
    }

    fn transactions(&self) -> Arc<dyn TransactionRepository> {
        self.transaction_repo.clone()
    }
}
