use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};

use crate::{
  entity::activity, prelude::*, state::AppState, sv::activity::ActivityData,
};

pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<activity::Model>>> {
  Ok(Json(app.sv().activity.all().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  Json(data): Json<ActivityData>,
) -> Result<(StatusCode, Json<activity::Model>)> {
  let activity = app.sv().activity.create(data).await?;
  Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn retrieve(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<Json<activity::Model>> {
  Ok(Json(app.sv().activity.by_id(id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
  Json(data): Json<ActivityData>,
) -> Result<Json<activity::Model>> {
  Ok(Json(app.sv().activity.update(id, data).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<i32>,
) -> Result<StatusCode> {
  app.sv().activity.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
