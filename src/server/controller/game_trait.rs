use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListParams},
        resource::{CreateResourceDto, ResourceDto},
    },
    server::{controller::resource, error::Error, model::app::AppState},
};

pub static TRAIT_TAG: &str = "trait";

/// List traits in creation order
#[utoipa::path(
    get,
    path = "/traits",
    tag = TRAIT_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing traits", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_traits(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    resource::get_all::<entity::prelude::Trait>(&state, params).await
}

/// Create a trait
#[utoipa::path(
    post,
    path = "/traits",
    tag = TRAIT_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Created trait", body = ResourceDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A trait with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trait(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    resource::create::<entity::prelude::Trait>(&state, payload).await
}

/// Delete a trait, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/traits/{id}",
    tag = TRAIT_TAG,
    params(("id" = String, Path, description = "Id of the trait")),
    responses(
        (status = 200, description = "Deleted trait", body = ResourceDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trait(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<entity::prelude::Trait>(&state, &id).await
}
