//! Repository layer - Data access abstraction
//!
//! One trait per table, each with a SeaORM-backed store. Services only see
//! the traits, which lets tests swap in generated mocks.

pub mod entities;
mod place_repository;
mod transaction_repository;
mod user_repository;

pub use place_repository::{PlaceRepository, PlaceStore};
pub use transaction_repository::{TransactionRepository, TransactionStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use place_repository::MockPlaceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use transaction_repository::MockTransactionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
