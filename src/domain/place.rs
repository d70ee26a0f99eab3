//! Place: a named income/expense source.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Place domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Irish Pub")]
    pub name: String,
    /// Rating from 1 to 5
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,
}

/// Fields of a place to create or overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceInput {
    pub name: String,
    pub rating: i32,
}
