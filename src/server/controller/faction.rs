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

pub static FACTION_TAG: &str = "faction";

/// List factions in creation order
#[utoipa::path(
    get,
    path = "/factions",
    tag = FACTION_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing factions", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_factions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    resource::get_all::<entity::prelude::Faction>(&state, params).await
}

/// Create a faction
#[utoipa::path(
    post,
    path = "/factions",
    tag = FACTION_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Created faction", body = ResourceDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A faction with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faction(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    resource::create::<entity::prelude::Faction>(&state, payload).await
}

/// Delete a faction, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/factions/{id}",
    tag = FACTION_TAG,
    params(("id" = String, Path, description = "Id of the faction")),
    responses(
        (status = 200, description = "Deleted faction", body = ResourceDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<entity::prelude::Faction>(&state, &id).await
}
