use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListParams},
        skill::{CreateSkillDto, SkillDto},
    },
    server::{error::Error, model::app::AppState, service::skill::SkillService},
};

pub static SKILL_TAG: &str = "skill";

/// List skills with their skill type
#[utoipa::path(
    get,
    path = "/skills",
    tag = SKILL_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing skills", body = Vec<SkillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_skills(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let skills = SkillService::new(&state.db).get_all(&params).await?;

    Ok((StatusCode::OK, Json(skills)).into_response())
}

/// Create a skill belonging to an existing skill type
#[utoipa::path(
    post,
    path = "/skills",
    tag = SKILL_TAG,
    request_body = CreateSkillDto,
    responses(
        (status = 201, description = "Created skill", body = SkillDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A skill with the same name already exists", body = ErrorDto),
        (status = 500, description = "Unknown skill type or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<CreateSkillDto>,
) -> Result<impl IntoResponse, Error> {
    let skill = SkillService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(skill)).into_response())
}

/// Delete a skill, returning it as it was before deletion
#[utoipa::path(
    delete,
    path = "/skills/{id}",
    tag = SKILL_TAG,
    params(("id" = String, Path, description = "Id of the skill")),
    responses(
        (status = 200, description = "Deleted skill", body = SkillDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let skill = SkillService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(skill)).into_response())
}
