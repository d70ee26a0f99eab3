use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::validation_failed;
use crate::errors::AppError;

/// Positive integer `:id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i32);

impl IdParam {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdParam(id)),
            _ => Err(validation_failed(
                "params",
                [("id".to_string(), vec!["id must be a positive integer".to_string()])],
            )),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::internal(format!("Missing id path parameter: {}", e)))?;

        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_positive_ids() {
        assert_eq!(IdParam::parse("42").unwrap(), IdParam(42));
    }

    #[test]
    fn test_rejects_zero_negative_and_text() {
        for raw in ["0", "-3", "abc", "1.5", "99999999999"] {
            let err = IdParam::parse(raw).unwrap_err();
            match err {
                AppError::Validation { details, .. } => assert_eq!(
                    details.unwrap(),
                    json!({ "params": { "id": ["id must be a positive integer"] } })
                ),
                other => panic!("expected validation error for {raw}, got {:?}", other),
            }
        }
    }
}
