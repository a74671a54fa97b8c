use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListParams},
        weapon::{CreateWeaponDto, WeaponDto},
    },
    server::{error::Error, model::app::AppState, service::weapon::WeaponService},
};

pub static WEAPON_TAG: &str = "weapon";

/// List weapons with weapon type, weapon stats and trait links
#[utoipa::path(
    get,
    path = "/weapons",
    tag = WEAPON_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Success when listing weapons", body = Vec<WeaponDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weapons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let weapons = WeaponService::new(&state.db).get_all(&params).await?;

    Ok((StatusCode::OK, Json(weapons)).into_response())
}

/// Create a weapon with its weapon stats and trait links in one transaction
#[utoipa::path(
    post,
    path = "/weapons",
    tag = WEAPON_TAG,
    request_body = CreateWeaponDto,
    responses(
        (status = 201, description = "Created weapon", body = WeaponDto),
        (status = 400, description = "Blank name or a trait linked twice on one weapon stats entry", body = ErrorDto),
        (status = 409, description = "A weapon with the same name already exists", body = ErrorDto),
        (status = 500, description = "Unknown weapon type or trait, or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_weapon(
    State(state): State<AppState>,
    Json(payload): Json<CreateWeaponDto>,
) -> Result<impl IntoResponse, Error> {
    let weapon = WeaponService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(weapon)).into_response())
}

/// Delete a weapon and every weapon stats row and trait link it owns
#[utoipa::path(
    delete,
    path = "/weapons/{id}",
    tag = WEAPON_TAG,
    params(("id" = String, Path, description = "Id of the weapon")),
    responses(
        (status = 200, description = "Weapon as it was before deletion", body = WeaponDto),
        (status = 500, description = "Unknown id or internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_weapon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let weapon = WeaponService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(weapon)).into_response())
}
