//! Budget API - track income and expenses per place.
//!
//! Users register and sign in, record the places where they spend or earn
//! money, and book transactions against them. Each user sees their own
//! transactions; admins see everything.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, places, transactions and password hashing
//! - **services**: Use cases, access scoping and constraint translation
//! - **infra**: Database, migrations, seed data and repositories
//! - **api**: HTTP handlers, middleware, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrations run on startup)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load development data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CurrentUser, Password, Place, Transaction, User, UserRole};
pub use errors::{AppError, AppResult};
