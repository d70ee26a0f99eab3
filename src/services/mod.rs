//! Application services layer - Use cases and business logic.
//!
//! Services depend on the [`UnitOfWork`](crate::infra::UnitOfWork) abstraction
//! rather than concrete stores, and translate constraint violations on every
//! write path.

mod auth_service;
pub mod container;
mod db_error;
mod place_service;
mod transaction_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{generate_token, AuthResponse, AuthService, Authenticator, Claims};
pub use place_service::{PlaceManager, PlaceService};
pub use transaction_service::{TransactionManager, TransactionService};
pub use user_service::{UserManager, UserService};
