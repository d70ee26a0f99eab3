use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

use super::validation_failed;
use crate::errors::AppError;

/// Rejects any query string parameter; used by list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct EmptyQuery;

#[async_trait]
impl<S> FromRequestParts<S> for EmptyQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                validation_failed("query", [("query".to_string(), vec![e.body_text()])])
            })?;

        if params.is_empty() {
            return Ok(EmptyQuery);
        }

        let mut keys: Vec<String> = params.into_keys().collect();
        keys.sort();
        Err(validation_failed(
            "query",
            keys.into_iter().map(|key| {
                let message = format!("{} is not allowed", key);
                (key, vec![message])
            }),
        ))
    }
}
