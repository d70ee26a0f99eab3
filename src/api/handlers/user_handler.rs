//! User handlers: sign-in, registration and self-or-admin user management.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{EmptyQuery, IdParam, ValidatedJson};
use crate::api::middleware::{require_admin, require_self_or_admin};
use crate::api::AppState;
use crate::config::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::domain::{CurrentUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::services::AuthResponse;
use crate::types::{NoContent, UserList};

/// User registration request
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "name must be 1 to 255 characters"))]
    #[schema(example = "Karine Samyn")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "karine.samyn@hogent.be")]
    pub email: String,
    #[validate(length(
        min = MIN_PASSWORD_LENGTH,
        max = MAX_PASSWORD_LENGTH,
        message = "password must be 8 to 30 characters"
    ))]
    #[schema(example = "12345678", min_length = 8, max_length = 30)]
    pub password: String,
}

/// User login request
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "thomas.aelbrecht@hogent.be")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "12345678")]
    pub password: String,
}

/// User update request
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "name must be 1 to 255 characters"))]
    #[schema(example = "Karine Samyn")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "karine.samyn@hogent.be")]
    pub email: String,
}

/// Routes reachable without a token
pub fn public_user_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

/// Routes behind the authentication middleware
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Email and password do not match")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(response))
}

/// Register a new user and sign them in
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered and signed in", body = AuthResponse),
        (status = 400, description = "Validation error or email already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(response))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = UserList),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    _: EmptyQuery,
) -> AppResult<Json<UserList>> {
    require_admin(&current_user)?;
    let users = state.user_service.list_users().await?;
    Ok(Json(users.map(UserResponse::from)))
}

/// Get a user (self or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Can only view own profile unless admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<UserResponse>> {
    require_self_or_admin(&current_user, id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update name and email (self or admin)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error or email already taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    require_self_or_admin(&current_user, id)?;
    let user = state
        .user_service
        .update_user(
            id,
            UpdateUser {
                name: payload.name,
                email: payload.email,
            },
        )
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and their transactions (self or admin)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<NoContent> {
    require_self_or_admin(&current_user, id)?;
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}
