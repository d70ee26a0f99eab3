//! API layer - HTTP handlers and middleware
//!
//! - Request handlers and their request bodies
//! - Authentication middleware and access rules
//! - Validating extractors
//! - Route definitions and OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
