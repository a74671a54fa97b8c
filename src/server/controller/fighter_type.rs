use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListParams},
        fighter_type::{CreateFighterTypeDto, FighterTypeDto},
    },
    server::{error::Error, model::app::AppState, service::fighter_type::FighterTypeService},
};

pub static FIGHTER_TYPE_TAG: &str = "fighter-type";

/// List fighter types with faction, fighter category and characteristics
#[utoipa::path(
    get,
    path = "/fighter-types",
    tag = FIGHTER_TYPE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing fighter types", body = Vec<FighterTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fighter_types(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let fighter_types = FighterTypeService::new(&state.db).get_all(&params).await?;

    Ok((StatusCode::OK, Json(fighter_types)).into_response())
}

/// Create a fighter type and its characteristic profile
#[utoipa::path(
    post,
    path = "/fighter-types",
    tag = FIGHTER_TYPE_TAG,
    request_body = CreateFighterTypeDto,
    responses(
        (status = 201, description = "Created fighter type", body = FighterTypeDto),
        (status = 400, description = "Blank name, negative cost or non-positive characteristic", body = ErrorDto),
        (status = 409, description = "A fighter type with the same name already exists", body = ErrorDto),
        (status = 500, description = "Unknown faction or fighter category, or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fighter_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateFighterTypeDto>,
) -> Result<impl IntoResponse, Error> {
    let fighter_type = FighterTypeService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(fighter_type)).into_response())
}

/// Delete a fighter type together with its characteristic profile
#[utoipa::path(
    delete,
    path = "/fighter-types/{id}",
    tag = FIGHTER_TYPE_TAG,
    params(("id" = String, Path, description = "Id of the fighter type")),
    responses(
        (status = 200, description = "Deleted fighter type", body = FighterTypeDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fighter_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let fighter_type = FighterTypeService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(fighter_type)).into_response())
}
