//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/api-docs/openapi.json` and browsable at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{health_handler, place_handler, transaction_handler, user_handler};
use crate::domain::{NamedRef, Place, Transaction, UserResponse, UserRole};
use crate::services::AuthResponse;
use crate::types::{PlaceList, TransactionList, UserList};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Budget API",
        version = "0.1.0",
        description = "Track income and expenses per place, with JWT authentication"
    ),
    servers(
        (url = "http://localhost:9000", description = "Local development server")
    ),
    paths(
        health_handler::ping,
        health_handler::version,
        user_handler::login,
        user_handler::register,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        place_handler::list_places,
        place_handler::get_place,
        place_handler::create_place,
        place_handler::update_place,
        place_handler::delete_place,
        transaction_handler::list_transactions,
        transaction_handler::get_transaction,
        transaction_handler::create_transaction,
        transaction_handler::update_transaction,
        transaction_handler::delete_transaction,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            Place,
            NamedRef,
            Transaction,
            // Envelopes
            UserList,
            PlaceList,
            TransactionList,
            AuthResponse,
            // Request bodies
            user_handler::LoginRequest,
            user_handler::RegisterRequest,
            user_handler::UpdateUserRequest,
            place_handler::PlaceRequest,
            transaction_handler::TransactionRequest,
            health_handler::PingResponse,
            health_handler::VersionResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and build information"),
        (name = "Users", description = "Sign-in, registration and user management"),
        (name = "Places", description = "Income and expense sources"),
        (name = "Transactions", description = "Income and expenses of the signed-in user")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/users/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health/ping",
            "/api/users/login",
            "/api/users/{id}",
            "/api/places",
            "/api/transactions/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
