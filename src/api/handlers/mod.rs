//! HTTP request handlers.

pub mod health_handler;
pub mod place_handler;
pub mod transaction_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use place_handler::place_routes;
pub use transaction_handler::transaction_routes;
pub use user_handler::{public_user_routes, user_routes};
