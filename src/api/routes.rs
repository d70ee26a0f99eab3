//! Application route configuration.

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware, Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    health_routes, place_routes, public_user_routes, transaction_routes, user_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::Config;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let api = Router::new()
        .nest("/health", health_routes())
        .nest(
            "/users",
            public_user_routes().merge(user_routes().route_layer(auth.clone())),
        )
        .nest("/places", place_routes().route_layer(auth.clone()))
        .nest("/transactions", transaction_routes().route_layer(auth));

    Router::new()
        .nest("/api", api)
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global middleware
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured frontend origins
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(config.cors_max_age_seconds))
}
