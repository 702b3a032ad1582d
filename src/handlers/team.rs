use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};

use crate::{entity::team, prelude::*, state::AppState, sv::team::TeamData};

pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<team::Model>>> {
  Ok(Json(app.sv().team.all().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  Json(data): Json<TeamData>,
) -> Result<(StatusCode, Json<team::Model>)> {
  let team = app.sv().team.create(data).await?;
  Ok((StatusCode::CREATED, Json(team)))
}

pub async fn retrieve(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<Json<team::Model>> {
  Ok(Json(app.sv().team.by_id(id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
  Json(data): Json<TeamData>,
) -> Result<Json<team::Model>> {
  Ok(Json(app.sv().team.update(id, data).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<StatusCode> {
  app.sv().team.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
