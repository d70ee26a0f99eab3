//! Translation of relational constraint violations into service errors.
//!
//! Write paths funnel their errors through [`map_db_error`] so a duplicate
//! name or a dangling foreign key reaches the client as a 400 or 404 with a
//! readable message instead of a 500.

use sea_orm::SqlErr;

use crate::config::{
    FK_TRANSACTION_PLACE, FK_TRANSACTION_USER, IDX_PLACE_NAME_UNIQUE, IDX_USER_EMAIL_UNIQUE,
};
use crate::errors::AppError;

/// Map a constraint violation to its service error, if it is one we know.
pub(crate) fn translate_sql_err(err: &SqlErr) -> Option<AppError> {
    match err {
        SqlErr::UniqueConstraintViolation(detail) => {
            let message = if detail.contains(IDX_PLACE_NAME_UNIQUE) {
                "A place with this name already exists"
            } else if detail.contains(IDX_USER_EMAIL_UNIQUE) {
                "There is already a user with this email address"
            } else {
                "This item already exists"
            };
            Some(AppError::validation(message))
        }
        SqlErr::ForeignKeyConstraintViolation(detail) => {
            if detail.contains(FK_TRANSACTION_USER) {
                Some(AppError::not_found("This user does not exist"))
            } else if detail.contains(FK_TRANSACTION_PLACE) {
                Some(AppError::not_found("This place does not exist"))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Replace database errors caused by constraints; pass everything else on.
pub(crate) fn map_db_error(err: AppError) -> AppError {
    match err {
        AppError::Database(db_err) => match db_err.sql_err().as_ref().and_then(translate_sql_err) {
            Some(translated) => {
                tracing::debug!(error = %db_err, "Constraint violation translated");
                translated
            }
            None => AppError::Database(db_err),
        },
        other => other,
    }
}
