//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and seeding, plus the SeaORM-backed
//! repositories behind the [`UnitOfWork`] seam.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    PlaceRepository, PlaceStore, TransactionRepository, TransactionStore, UserRepository,
    UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockPlaceRepository, MockTransactionRepository, MockUserRepository};
