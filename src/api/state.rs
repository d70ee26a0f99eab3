//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, PlaceService, ServiceContainer, Services, TransactionService, UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub place_service: Arc<dyn PlaceService>,
    pub transaction_service: Arc<dyn TransactionService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire all services over the database connection.
    pub fn from_config(database: &Database, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container)
    }

    /// Take every service out of a container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            place_service: container.places(),
            transaction_service: container.transactions(),
            config: Arc::new(container.config()),
        }
    }
}
