//! JWT authentication middleware and access rules.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::CurrentUser;
use crate::errors::{AppError, AppResult};

/// JWT authentication middleware.
///
/// Validates the bearer token and injects the [`CurrentUser`] into the
/// request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("You need to be signed in"))?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or_else(|| AppError::unauthorized("Invalid authentication token"))?;

    let claims = state.auth_service.verify_token(token)?;
    let current_user = CurrentUser::from(claims);
    tracing::debug!(user_id = current_user.id, "Request authenticated");

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require admin role.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You are not allowed to view this part of the application",
        ))
    }
}

/// Require the caller to be `user_id` or an admin.
pub fn require_self_or_admin(user: &CurrentUser, user_id: i32) -> AppResult<()> {
    if user.can_access_user(user_id) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You are not allowed to view this user's information",
        ))
    }
}
