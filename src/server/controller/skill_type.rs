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

pub static SKILL_TYPE_TAG: &str = "skill-type";

/// List skill types in creation order
#[utoipa::path(
    get,
    path = "/skill-types",
    tag = SKILL_TYPE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing skill types", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_skill_types(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    resource::get_all::<entity::prelude::SkillType>(&state, params).await
}

/// Create a skill type
#[utoipa::path(
    post,
    path = "/skill-types",
    tag = SKILL_TYPE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Created skill type", body = ResourceDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A skill type with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_skill_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    resource::create::<entity::prelude::SkillType>(&state, payload).await
}

/// Delete a skill type, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/skill-types/{id}",
    tag = SKILL_TYPE_TAG,
    params(("id" = String, Path, description = "Id of the skill type")),
    responses(
        (status = 200, description = "Deleted skill type", body = ResourceDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_skill_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<entity::prelude::SkillType>(&state, &id).await
}
