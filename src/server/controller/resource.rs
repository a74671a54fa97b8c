//! Handler bodies shared by the reference table controllers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::IntoActiveModel;

use crate::{
    model::{api::ListParams, resource::CreateResourceDto},
    server::{
        data::resource::NamedEntity, error::Error, model::app::AppState,
        service::resource::ResourceService,
    },
};

pub async fn get_all<E>(state: &AppState, params: ListParams) -> Result<Response, Error>
where
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    let rows = ResourceService::<E>::new(&state.db).get_all(&params).await?;

    Ok((StatusCode::OK, Json(rows)).into_response())
}

pub async fn create<E>(state: &AppState, payload: CreateResourceDto) -> Result<Response, Error>
where
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    let row = ResourceService::<E>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(row)).into_response())
}

pub async fn delete<E>(state: &AppState, id: &str) -> Result<Response, Error>
where
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    let row = ResourceService::<E>::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(row)).into_response())
}
