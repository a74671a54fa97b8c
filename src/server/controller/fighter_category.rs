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

pub static FIGHTER_CATEGORY_TAG: &str = "fighter-category";

/// List fighter categories in creation order
#[utoipa::path(
    get,
    path = "/fighter-categories",
    tag = FIGHTER_CATEGORY_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing fighter categories", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fighter_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    resource::get_all::<entity::prelude::FighterCategory>(&state, params).await
}

/// Create a fighter category
#[utoipa::path(
    post,
    path = "/fighter-categories",
    tag = FIGHTER_CATEGORY_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Created fighter category", body = ResourceDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A fighter category with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fighter_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    resource::create::<entity::prelude::FighterCategory>(&state, payload).await
}

/// Delete a fighter category, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/fighter-categories/{id}",
    tag = FIGHTER_CATEGORY_TAG,
    params(("id" = String, Path, description = "Id of the fighter category")),
    responses(
        (status = 200, description = "Deleted fighter category", body = ResourceDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fighter_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<entity::prelude::FighterCategory>(&state, &id).await
}
