//! Place handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{EmptyQuery, IdParam, ValidatedJson};
use crate::api::AppState;
use crate::config::{MAX_NAME_LENGTH, MAX_RATING, MIN_RATING};
use crate::domain::{Place, PlaceInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, PlaceList};

/// Body of create and update requests
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct PlaceRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "name must be 1 to 255 characters"))]
    #[schema(example = "Irish Pub")]
    pub name: String,
    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "rating must be between 1 and 5"))]
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,
}

impl From<PlaceRequest> for PlaceInput {
    fn from(request: PlaceRequest) -> Self {
        PlaceInput {
            name: request.name,
            rating: request.rating,
        }
    }
}

pub fn place_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_places).post(create_place))
        .route("/:id", get(get_place).put(update_place).delete(delete_place))
}

/// List places, ordered by name
#[utoipa::path(
    get,
    path = "/api/places",
    tag = "Places",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All places", body = PlaceList),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_places(
    State(state): State<AppState>,
    _: EmptyQuery,
) -> AppResult<Json<PlaceList>> {
    Ok(Json(state.place_service.list_places().await?))
}

#[utoipa::path(
    get,
    path = "/api/places/{id}",
    tag = "Places",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Place", body = Place),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn get_place(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<Place>> {
    Ok(Json(state.place_service.get_place(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/places",
    tag = "Places",
    security(("bearer_auth" = [])),
    request_body = PlaceRequest,
    responses(
        (status = 201, description = "Place created", body = Place),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_place(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlaceRequest>,
) -> AppResult<Created<Place>> {
    let place = state.place_service.create_place(payload.into()).await?;
    Ok(Created(place))
}

#[utoipa::path(
    put,
    path = "/api/places/{id}",
    tag = "Places",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Place ID")),
    request_body = PlaceRequest,
    responses(
        (status = 200, description = "Place updated", body = Place),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn update_place(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<PlaceRequest>,
) -> AppResult<Json<Place>> {
    Ok(Json(state.place_service.update_place(id, payload.into()).await?))
}

/// Delete a place and every transaction made there
#[utoipa::path(
    delete,
    path = "/api/places/{id}",
    tag = "Places",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Place ID")),
    responses(
        (status = 204, description = "Place deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn delete_place(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<NoContent> {
    state.place_service.delete_place(id).await?;
    Ok(NoContent)
}
