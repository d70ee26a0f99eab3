//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out as
//! trait objects.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, PlaceManager, PlaceService, TransactionManager,
    TransactionService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{Persistence, UnitOfWork};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn places(&self) -> Arc<dyn PlaceService>;

    fn transactions(&self) -> Arc<dyn TransactionService>;

    /// Configuration the services were built with
    fn config(&self) -> Config;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    place_service: Arc<dyn PlaceService>,
    transaction_service: Arc<dyn TransactionService>,
    config: Config,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        Self::with_unit_of_work(Arc::new(Persistence::new(db)), config)
    }

    /// Create service container over any Unit of Work (mocked in tests)
    pub fn with_unit_of_work<U: UnitOfWork + 'static>(uow: Arc<U>, config: Config) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            place_service: Arc::new(PlaceManager::new(uow.clone())),
            transaction_service: Arc::new(TransactionManager::new(uow)),
            config,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn places(&self) -> Arc<dyn PlaceService> {
        self.place_service.clone()
    }

    fn transactions(&self) -> Arc<dyn TransactionService> {
        self.transaction_service.clone()
    }

    fn config(&self) -> Config {
        self.config.clone()
    }
}
