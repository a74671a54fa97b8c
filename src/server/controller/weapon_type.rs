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

pub static WEAPON_TYPE_TAG: &str = "weapon-type";

/// List weapon types in creation order
#[utoipa::path(
    get,
    path = "/weapon-types",
    tag = WEAPON_TYPE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing weapon types", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weapon_types(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    resource::get_all::<entity::prelude::WeaponType>(&state, params).await
}

/// Create a weapon type
#[utoipa::path(
    post,
    path = "/weapon-types",
    tag = WEAPON_TYPE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Created weapon type", body = ResourceDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A weapon type with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_weapon_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    resource::create::<entity::prelude::WeaponType>(&state, payload).await
}

/// Delete a weapon type, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/weapon-types/{id}",
    tag = WEAPON_TYPE_TAG,
    params(("id" = String, Path, description = "Id of the weapon type")),
    responses(
        (status = 200, description = "Deleted weapon type", body = ResourceDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_weapon_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<entity::prelude::WeaponType>(&state, &id).await
}
