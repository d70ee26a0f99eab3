//! Transaction handlers. The caller's identity scopes every operation.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::{EmptyQuery, IdParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CurrentUser, Transaction, TransactionDraft};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent, TransactionList};

/// Body of create and update requests
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Positive for income, negative for expenses
    #[validate(custom(function = "non_zero", message = "amount must not be zero"))]
    #[schema(example = 3500)]
    pub amount: i32,
    #[validate(
        required(message = "date is required"),
        custom(function = "in_the_past", message = "date must be in the past")
    )]
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "placeId must be a positive integer"))]
    #[schema(example = 1)]
    pub place_id: i32,
}

fn non_zero(amount: i32) -> Result<(), ValidationError> {
    if amount == 0 {
        return Err(ValidationError::new("non_zero"));
    }
    Ok(())
}

fn in_the_past(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date > Utc::now() {
        return Err(ValidationError::new("in_the_past"));
    }
    Ok(())
}

impl TryFrom<TransactionRequest> for TransactionDraft {
    type Error = AppError;

    fn try_from(request: TransactionRequest) -> AppResult<Self> {
        let date = request
            .date
            .ok_or_else(|| AppError::validation("date is required"))?;

        Ok(TransactionDraft {
            amount: request.amount,
            date,
            place_id: request.place_id,
        })
    }
}

pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route(
            "/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

/// List visible transactions, ordered by date
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own transactions, or all for admins", body = TransactionList),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_transactions(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    _: EmptyQuery,
) -> AppResult<Json<TransactionList>> {
    let transactions = state
        .transaction_service
        .list_transactions(&current_user)
        .await?;
    Ok(Json(transactions))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction", body = Transaction),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Transaction not found or not visible")
    )
)]
pub async fn get_transaction(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .get_transaction(&current_user, id)
        .await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn create_transaction(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TransactionRequest>,
) -> AppResult<Created<Transaction>> {
    let transaction = state
        .transaction_service
        .create_transaction(&current_user, payload.try_into()?)
        .await?;
    Ok(Created(transaction))
}

#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transaction ID")),
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Transaction updated", body = Transaction),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Transaction or place not found")
    )
)]
pub async fn update_transaction(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<TransactionRequest>,
) -> AppResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .update_transaction(&current_user, id, payload.try_into()?)
        .await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Transaction not found or not visible")
    )
)]
pub async fn delete_transaction(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<NoContent> {
    state
        .transaction_service
        .delete_transaction(&current_user, id)
        .await?;
    Ok(NoContent)
}
