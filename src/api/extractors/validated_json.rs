//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::{field_messages, validation_failed};
use crate::errors::AppError;

/// JSON body that has passed its `validator` rules.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct PlaceRequest {
///     #[validate(length(min = 1, max = 255))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<PlaceRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            validation_failed("body", [("json".to_string(), vec![e.body_text()])])
        })?;

        value
            .validate()
            .map_err(|e| validation_failed("body", field_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 1, max = 5))]
        rating: i32,
    }

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct Reference {
        #[validate(range(min = 1, message = "placeId must be a positive integer"))]
        place_id: i32,
    }

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn details(err: AppError) -> serde_json::Value {
        match err {
            AppError::Validation { details, .. } => details.unwrap(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let ValidatedJson(payload) =
            ValidatedJson::<Payload>::from_request(request(r#"{"name":"Loon","rating":5}"#), &())
                .await
                .unwrap();

        assert_eq!(payload.name, "Loon");
        assert_eq!(payload.rating, 5);
    }

    #[tokio::test]
    async fn test_field_errors_listed_under_body() {
        let err = ValidatedJson::<Payload>::from_request(request(r#"{"name":"","rating":9}"#), &())
            .await
            .err()
            .unwrap();

        let details = details(err);
        assert_eq!(details["body"]["name"], json!(["name must not be empty"]));
        assert_eq!(details["body"]["rating"], json!(["rating is invalid"]));
    }

    #[tokio::test]
    async fn test_field_errors_use_client_field_names() {
        let err = ValidatedJson::<Reference>::from_request(request(r#"{"placeId":0}"#), &())
            .await
            .err()
            .unwrap();

        let details = details(err);
        assert_eq!(
            details["body"]["placeId"],
            json!(["placeId must be a positive integer"])
        );
        assert!(details["body"].get("place_id").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let err = ValidatedJson::<Payload>::from_request(request("{not json"), &())
            .await
            .err()
            .unwrap();

        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert!(details(err)["body"]["json"].is_array());
    }
}
